use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    bot::{event::EventListener, registry::EventBuilder},
    error::AppError,
    model::event::{Emitter, EventPayload, Trigger, GUILD_CREATE},
    state::BotState,
};

/// Logs guilds becoming available to the bot.
pub struct GuildCreateListener;

pub fn descriptor() -> EventBuilder {
    EventBuilder::new(GUILD_CREATE)
        .emitter(Emitter::Gateway)
        .trigger(Trigger::On)
        .listener(GuildCreateListener)
}

#[async_trait]
impl EventListener for GuildCreateListener {
    async fn run(&self, _state: &BotState, payload: &EventPayload) -> Result<(), AppError> {
        let EventPayload::GuildCreate {
            guild_id,
            name,
            member_count,
            is_new,
        } = payload
        else {
            return Ok(());
        };

        if *is_new {
            tracing::info!("Joined guild {} ({}) with {} members", name, guild_id, member_count);
        } else {
            tracing::debug!(
                "Guild {} ({}) available with {} members",
                name,
                guild_id,
                member_count
            );
        }

        Ok(())
    }
}
