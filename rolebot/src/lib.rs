pub mod button;
pub mod context;
pub mod interaction;
mod interaction_impl;
pub mod model;
pub mod reply;

pub use {
    context::Context,
    interaction::Interaction,
    reply::{Reply, Responder},
};
