pub mod config;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod mock;

pub use rolebot;

use rolebot::model::InvalidModelData;
use thiserror::Error;

use std::error;

/// An unhandled fault while producing the response to an interaction.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform call failed.
    #[error("platform error: {0}")]
    Platform(Box<dyn error::Error + Send + Sync + 'static>),
    #[error(transparent)]
    InvalidModelData(#[from] InvalidModelData),
}

impl Error {
    pub fn platform<E>(err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Self::Platform(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
