use dioxus_logger::tracing::Level;
use std::path::PathBuf;

use crate::{
    error::{config::ConfigError, AppError},
    model::command::CommandScope,
    util::parse::{parse_flag, parse_snowflake},
};

const DEFAULT_DATA_DIR: &str = "assets/data";

pub struct Config {
    pub discord_bot_token: String,
    pub discord_application_id: u64,
    pub discord_guild_id: Option<u64>,
    pub clear_global_commands: bool,

    pub data_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never
    /// mutate global state.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match optional("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                    value,
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_application_id: parse_snowflake(
                "DISCORD_APPLICATION_ID",
                required("DISCORD_APPLICATION_ID")?,
            )?,
            discord_guild_id: optional("DISCORD_GUILD_ID")
                .map(|value| parse_snowflake("DISCORD_GUILD_ID", value))
                .transpose()?,
            clear_global_commands: optional("DISCORD_CLEAR_GLOBAL_COMMANDS")
                .map(|value| parse_flag("DISCORD_CLEAR_GLOBAL_COMMANDS", value))
                .transpose()?
                .unwrap_or(false),
            data_dir: optional("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            log_level,
        })
    }

    /// Registration scope for slash command schemas.
    ///
    /// Registers to the configured guild when one is set, globally otherwise.
    pub fn command_scope(&self) -> CommandScope {
        match self.discord_guild_id {
            Some(guild_id) => CommandScope::Guild(guild_id),
            None => CommandScope::Global,
        }
    }
}
