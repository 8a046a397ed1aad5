//! Ready event handler.
//!
//! Fired after the gateway handshake completes, and again whenever serenity has to
//! open a fresh session. The handler only forwards the signal; the subscribed
//! listener decides whether it runs more than once.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::{
    model::event::{Emitter, EventPayload, READY},
    state::BotState,
};

/// Publishes the gateway `ready` signal to the event registry.
///
/// # Arguments
/// - `state` - Bot state holding the event registry
/// - `_ctx` - Discord context, unused
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, _ctx: Context, ready: Ready) {
    tracing::debug!("Received ready for session {}", ready.session_id);

    let payload = EventPayload::Ready {
        user_name: ready.user.name.clone(),
        guild_count: ready.guilds.len(),
    };

    state
        .events
        .emit(state, Emitter::Gateway, READY, &payload)
        .await;
}
