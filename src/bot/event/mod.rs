//! Event descriptors and the registration list.
//!
//! Each event module exposes a `descriptor()` returning an unvalidated
//! `EventBuilder`; the loader builds all of them and subscribes the result.

use serenity::async_trait;

use crate::{
    bot::registry::EventBuilder, error::AppError, model::event::EventPayload, state::BotState,
};

pub mod guild_create;
pub mod ready;
pub mod shutdown;

/// Callback run when a subscribed signal is emitted.
#[async_trait]
pub trait EventListener: Send + Sync {
    async fn run(&self, state: &BotState, payload: &EventPayload) -> Result<(), AppError>;
}

/// Events subscribed at startup.
pub fn all() -> Vec<EventBuilder> {
    vec![
        ready::descriptor(),
        guild_create::descriptor(),
        shutdown::descriptor(),
    ]
}
