use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    bot::{event::EventListener, registry::EventBuilder},
    error::AppError,
    model::event::{Emitter, EventPayload, Trigger, SHUTDOWN},
    state::BotState,
};

/// Logs the shutdown request before the shard manager stops the gateway.
pub struct ShutdownListener;

pub fn descriptor() -> EventBuilder {
    EventBuilder::new(SHUTDOWN)
        .emitter(Emitter::Process)
        .trigger(Trigger::Once)
        .listener(ShutdownListener)
}

#[async_trait]
impl EventListener for ShutdownListener {
    async fn run(&self, state: &BotState, _payload: &EventPayload) -> Result<(), AppError> {
        let uptime = chrono::Utc::now() - state.started_at;

        tracing::info!(
            "Shutting down after {} minutes with {} commands and {} events loaded",
            uptime.num_minutes(),
            state.commands.len(),
            state.events.len()
        );

        Ok(())
    }
}
