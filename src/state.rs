//! Bot state shared by the gateway adapter, router and event listeners.
//!
//! `BotState` is the explicit context object that owns everything the bot looks
//! things up in while handling events. It is built once in `bot::start::init_bot`
//! after the loader has filled both registries, then wrapped in an `Arc` and never
//! mutated again.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    bot::registry::{CommandRegistry, EventRegistry},
    data::{discord::CommandApi, game_data::GameData},
    model::command::CommandScope,
};

/// Shared state handed to every command handler and event listener.
///
/// All fields are read-only once the state is shared, so concurrent interactions
/// never contend on it.
pub struct BotState {
    /// Slash and context-menu commands keyed by name, plus their ordered schemas.
    pub commands: CommandRegistry,

    /// Event descriptors keyed by signal name.
    pub events: EventRegistry,

    /// Cached static game data used by lookup commands.
    pub game_data: GameData,

    /// Remote command-registration endpoint.
    pub command_api: Arc<dyn CommandApi>,

    /// Scope the command schemas are registered to.
    pub scope: CommandScope,

    /// Whether global schemas are cleared on ready when registering to a guild.
    ///
    /// Avoids duplicate entries in the command picker after moving from global to
    /// guild registration during development.
    pub clear_global_commands: bool,

    /// Time the state was built, used to report uptime.
    pub started_at: DateTime<Utc>,
}

impl BotState {
    /// Creates the bot state from fully loaded registries.
    ///
    /// # Arguments
    /// - `commands` - Loaded command registry
    /// - `events` - Loaded event registry
    /// - `game_data` - Cached game data
    /// - `command_api` - Remote command-registration endpoint
    /// - `scope` - Registration scope for command schemas
    ///
    /// # Returns
    /// - `BotState` - State ready to be wrapped in an `Arc`
    pub fn new(
        commands: CommandRegistry,
        events: EventRegistry,
        game_data: GameData,
        command_api: Arc<dyn CommandApi>,
        scope: CommandScope,
    ) -> Self {
        Self {
            commands,
            events,
            game_data,
            command_api,
            scope,
            clear_global_commands: false,
            started_at: Utc::now(),
        }
    }

    pub fn with_clear_global_commands(mut self, clear: bool) -> Self {
        self.clear_global_commands = clear;
        self
    }
}
