//! Ready listener, registers the command schemas once the gateway is connected.
//!
//! Subscribed with a `Once` trigger: serenity emits `ready` again after a session is
//! re-established, and the schema set does not change while the process runs.

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    bot::{event::EventListener, registry::EventBuilder},
    error::AppError,
    model::{
        command::CommandScope,
        event::{Emitter, EventPayload, Trigger, READY},
    },
    service::registrar::CommandRegistrar,
    state::BotState,
};

pub struct ReadyListener;

pub fn descriptor() -> EventBuilder {
    EventBuilder::new(READY)
        .emitter(Emitter::Gateway)
        .trigger(Trigger::Once)
        .listener(ReadyListener)
}

#[async_trait]
impl EventListener for ReadyListener {
    /// Logs the connection, optionally clears stale global commands, then syncs
    /// the registry's schemas to the configured scope.
    ///
    /// A failed clear is logged and does not prevent the sync. A failed sync is
    /// returned and logged by the emitter; it is not retried.
    async fn run(&self, state: &BotState, payload: &EventPayload) -> Result<(), AppError> {
        if let EventPayload::Ready {
            user_name,
            guild_count,
        } = payload
        {
            tracing::info!(
                "{} is connected to Discord and serving {} guilds",
                user_name,
                guild_count
            );
        }

        let registrar = CommandRegistrar::new(state.command_api.clone());

        if state.clear_global_commands && state.scope != CommandScope::Global {
            if let Err(e) = registrar.clear(CommandScope::Global).await {
                tracing::error!("Failed to clear global slash commands: {}", e);
            }
        }

        registrar.sync(state.scope, state.commands.schemas()).await?;

        Ok(())
    }
}
