pub mod guild;
pub mod id;
pub mod permissions;

mod guild_impl;
mod id_impl;
mod permissions_impl;

use thiserror::Error;

/// An error indicating the platform handed over data that cannot be represented by the
/// model. One should always prefer using this error instead of panicking.
///
/// This would for example be a command interaction for `configure` without the required
/// `role` option.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid model data")]
pub struct InvalidModelData;
