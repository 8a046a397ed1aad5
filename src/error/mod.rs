//! Error types for startup, registration and interaction handling.
//!
//! `AppError` is the top-level error returned from `main`, from the registrar and
//! from command handlers. Domain-specific enums live in submodules and convert into
//! it with `?`.

pub mod asset;
pub mod config;
pub mod load;

use thiserror::Error;

use crate::error::{asset::AssetError, config::ConfigError, load::LoadError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while the bot starts or runs. Startup
/// errors (`ConfigErr`, `LoadErr`, `AssetErr`) abort the process; errors raised while
/// handling a single interaction are logged and reported to the invoking user only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command or event registry could not be built.
    ///
    /// Always fatal, the bot never connects with a partially wired registry.
    #[error(transparent)]
    LoadErr(#[from] LoadError),

    /// Static game-data asset could not be cached.
    #[error(transparent)]
    AssetErr(#[from] AssetError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised by REST calls (command registration,
    /// interaction replies) and by the gateway client itself.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
