mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

#[cfg(test)]
mod test_util;

use dioxus_logger::tracing;

use crate::{bot::start, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(&config);

    let game_data = startup::load_game_data(&config)?;

    let (client, state) = start::init_bot(&config, game_data).await?;

    startup::spawn_shutdown_listener(state, client.shard_manager.clone());

    start::start_bot(client).await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
