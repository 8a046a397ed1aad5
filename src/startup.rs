use dioxus_logger::tracing;
use serenity::all::ShardManager;
use std::sync::Arc;

use crate::{
    config::Config,
    data::game_data::{GameData, GameDataKind},
    error::AppError,
    model::event::{Emitter, EventPayload, SHUTDOWN},
    state::BotState,
};

/// Installs the global tracing subscriber at the configured level.
///
/// A subscriber that is already installed is left in place.
pub fn init_logging(config: &Config) {
    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Loads and caches every game data asset.
///
/// Missing or malformed assets abort startup, since lookup commands would otherwise
/// answer "not found" for data that exists.
///
/// # Arguments
/// - `config` - Application configuration containing the data directory
///
/// # Returns
/// - `Ok(GameData)` - All assets parsed and indexed
/// - `Err(AppError::AssetErr)` - An asset could not be read or parsed
pub fn load_game_data(config: &Config) -> Result<GameData, AppError> {
    let game_data = GameData::load(&config.data_dir)?;

    for kind in GameDataKind::ALL {
        tracing::debug!("Cached {} {} records", game_data.len(kind), kind.label());
    }
    tracing::info!("Loaded game data from {}", config.data_dir.display());

    Ok(game_data)
}

/// Waits for Ctrl-C, publishes the `shutdown` signal, then stops every shard.
///
/// # Arguments
/// - `state` - Bot state holding the event registry
/// - `shard_manager` - Shard manager of the running client
pub fn spawn_shutdown_listener(state: Arc<BotState>, shard_manager: Arc<ShardManager>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        state
            .events
            .emit(&state, Emitter::Process, SHUTDOWN, &EventPayload::Shutdown)
            .await;

        shard_manager.shutdown_all().await;
    });
}
