use serenity::all::{Context, Guild};

use crate::{
    model::event::{Emitter, EventPayload, GUILD_CREATE},
    state::BotState,
};

/// Publishes the gateway `guildCreate` signal to the event registry.
///
/// Fires on startup for each guild the bot is already in, when the bot joins a new
/// guild, and when a guild becomes available again after an outage.
///
/// # Arguments
/// - `state` - Bot state holding the event registry
/// - `_ctx` - Discord context, unused
/// - `guild` - Full guild data
/// - `is_new` - Whether the bot just joined the guild; `None` is treated as `false`
pub async fn handle_guild_create(
    state: &BotState,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let payload = EventPayload::GuildCreate {
        guild_id: guild.id.get(),
        name: guild.name,
        member_count: guild.member_count,
        is_new: is_new.unwrap_or(false),
    };

    state
        .events
        .emit(state, Emitter::Gateway, GUILD_CREATE, &payload)
        .await;
}
