//! The three interaction handlers. Each one returns an outcome describing what happened;
//! the outcome renders into the [`Reply`] sent back to the user.
//!
//! [`Reply`]: rolebot::Reply
pub mod configure;
pub mod panel;
pub mod toggle;

pub use configure::{configure, ConfigureOutcome};
pub use panel::panel;
pub use toggle::{toggle, ToggleOutcome};

/// Sent when a guild-only interaction arrives from outside a guild.
pub const GUILD_ONLY: &str = "This command can only be used in a server.";
