use dioxus_logger::tracing;
use serenity::all::{ApplicationId, Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::{
        command, event,
        handler::Handler,
        loader::{load_commands, load_events},
        registry::{CommandRegistry, EventRegistry},
    },
    config::Config,
    data::{discord::HttpCommandApi, game_data::GameData},
    error::AppError,
    state::BotState,
};

/// Loads every command and event, then builds the Discord client.
///
/// Loading happens before the client connects, so an invalid command schema or an
/// incomplete event descriptor aborts startup without touching Discord.
///
/// # Arguments
/// - `config` - Application configuration
/// - `game_data` - Cached game data served by lookup commands
///
/// # Returns
/// - `Ok((Client, Arc<BotState>))` - Client ready to start, plus the shared state
/// - `Err(AppError)` - Loading failed or the client could not be built
pub async fn init_bot(
    config: &Config,
    game_data: GameData,
) -> Result<(Client, Arc<BotState>), AppError> {
    let mut commands = CommandRegistry::new();
    let command_count = load_commands(&mut commands, command::all())?;

    let mut events = EventRegistry::new();
    let event_count = load_events(&mut events, event::all())?;

    tracing::info!("Loaded {} commands and {} events", command_count, event_count);
    if commands.is_empty() {
        tracing::warn!("No commands loaded, registering will remove every existing command");
    }
    if events.is_empty() {
        tracing::warn!("No events subscribed, commands will not be registered on ready");
    }

    let application_id = ApplicationId::new(config.discord_application_id);

    let http = Http::new(&config.discord_bot_token);
    http.set_application_id(application_id);
    let command_api = Arc::new(HttpCommandApi::new(Arc::new(http)));

    let state = Arc::new(
        BotState::new(
            commands,
            events,
            game_data,
            command_api,
            config.command_scope(),
        )
        .with_clear_global_commands(config.clear_global_commands),
    );

    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .application_id(application_id)
        .event_handler(Handler::new(state.clone()))
        .await?;

    Ok((client, state))
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until every shard has shut down, either because the gateway connection
/// failed or because `shutdown_all` was called on the shard manager.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
