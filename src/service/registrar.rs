//! Slash command schema registration.
//!
//! Pushes the command registry's schemas to Discord and removes stale ones. Both
//! operations return their result to the caller instead of logging and carrying on,
//! so the caller decides the sequencing; neither retries.

use dioxus_logger::tracing;
use futures::future::join_all;
use std::sync::Arc;

use crate::{
    data::discord::CommandApi,
    error::AppError,
    model::command::{ClearSummary, CommandSchema, CommandScope},
};

pub struct CommandRegistrar {
    api: Arc<dyn CommandApi>,
}

impl CommandRegistrar {
    /// Creates a new CommandRegistrar instance.
    ///
    /// # Arguments
    /// - `api` - Remote command-registration endpoint
    pub fn new(api: Arc<dyn CommandApi>) -> Self {
        Self { api }
    }

    /// Replaces the scope's registered commands with `schemas`.
    ///
    /// Always issues exactly one bulk overwrite, even for an empty schema list, which
    /// removes every command registered for the scope.
    ///
    /// # Arguments
    /// - `scope` - Global or a single guild
    /// - `schemas` - Complete schema set, in registration order
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands registered
    /// - `Err(AppError)` - Transport or API error; not retried
    pub async fn sync(
        &self,
        scope: CommandScope,
        schemas: &[CommandSchema],
    ) -> Result<usize, AppError> {
        let count = self.api.put_commands(scope, schemas).await?;

        tracing::info!("Registered {} {} slash commands", count, scope.label());

        Ok(count)
    }

    /// Deletes every command currently registered for the scope.
    ///
    /// All deletions are issued concurrently and awaited together. A failed
    /// deletion is logged and counted; it does not cancel the others.
    ///
    /// # Arguments
    /// - `scope` - Global or a single guild
    ///
    /// # Returns
    /// - `Ok(ClearSummary)` - Counts of deleted and failed commands
    /// - `Err(AppError)` - Registered commands could not be listed; nothing was deleted
    pub async fn clear(&self, scope: CommandScope) -> Result<ClearSummary, AppError> {
        let registered = self.api.list_commands(scope).await?;

        let deletions = registered.iter().map(|command| async move {
            (command, self.api.delete_command(scope, command.id).await)
        });

        let mut summary = ClearSummary::default();
        for (command, result) in join_all(deletions).await {
            match result {
                Ok(()) => summary.deleted += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Failed to delete {} slash command {} ({}): {}",
                        scope.label(),
                        command.name,
                        command.id,
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Cleared {} {} slash commands, {} failed",
            summary.deleted,
            scope.label(),
            summary.failed
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod test;
