use serenity::all::{Context, EventHandler, Guild, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{bot::router::InteractionRouter, state::BotState};

pub mod guild;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<BotState>,
    pub router: Arc<InteractionRouter>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        let router = Arc::new(InteractionRouter::new(state.clone()));
        Self { state, router }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, ctx, guild, is_new).await;
    }

    /// Called for every slash command, context menu, component or autocomplete interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self.router.clone(), ctx, interaction).await;
    }
}
