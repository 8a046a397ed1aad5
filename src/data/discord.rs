//! Discord application-command REST access.
//!
//! `CommandApi` is the seam between the registrar and Discord. The production
//! implementation wraps serenity's `Http` client; tests substitute a recording mock.

use serenity::all::{CommandId, GuildId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::command::{CommandSchema, CommandScope, RegisteredCommand},
};

/// Remote command-registration endpoint.
#[async_trait]
pub trait CommandApi: Send + Sync {
    /// Replaces the scope's registered commands with `schemas` in a single call.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands Discord reports as registered
    /// - `Err(AppError::DiscordErr)` - Transport or API error
    async fn put_commands(
        &self,
        scope: CommandScope,
        schemas: &[CommandSchema],
    ) -> Result<usize, AppError>;

    /// Lists the commands currently registered for the scope.
    async fn list_commands(&self, scope: CommandScope) -> Result<Vec<RegisteredCommand>, AppError>;

    /// Deletes one registered command by id.
    async fn delete_command(&self, scope: CommandScope, command_id: u64) -> Result<(), AppError>;
}

/// `CommandApi` backed by serenity's HTTP client.
///
/// The client must have its application id set, which `bot::start::init_bot`
/// does from configuration before any registration call is made.
pub struct HttpCommandApi {
    http: Arc<Http>,
}

impl HttpCommandApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandApi for HttpCommandApi {
    async fn put_commands(
        &self,
        scope: CommandScope,
        schemas: &[CommandSchema],
    ) -> Result<usize, AppError> {
        let registered = match scope {
            CommandScope::Global => self.http.create_global_commands(&schemas).await?,
            CommandScope::Guild(guild_id) => {
                self.http
                    .create_guild_commands(GuildId::new(guild_id), &schemas)
                    .await?
            }
        };

        Ok(registered.len())
    }

    async fn list_commands(&self, scope: CommandScope) -> Result<Vec<RegisteredCommand>, AppError> {
        let commands = match scope {
            CommandScope::Global => self.http.get_global_commands().await?,
            CommandScope::Guild(guild_id) => {
                self.http.get_guild_commands(GuildId::new(guild_id)).await?
            }
        };

        Ok(commands
            .into_iter()
            .map(|command| RegisteredCommand {
                id: command.id.get(),
                name: command.name,
            })
            .collect())
    }

    async fn delete_command(&self, scope: CommandScope, command_id: u64) -> Result<(), AppError> {
        let command_id = CommandId::new(command_id);

        match scope {
            CommandScope::Global => self.http.delete_global_command(command_id).await?,
            CommandScope::Guild(guild_id) => {
                self.http
                    .delete_guild_command(GuildId::new(guild_id), command_id)
                    .await?
            }
        }

        Ok(())
    }
}
