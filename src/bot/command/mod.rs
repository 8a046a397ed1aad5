//! Command descriptors and the registration list.
//!
//! Every command the bot exposes implements `SlashCommand` and is listed in `all()`.
//! The loader validates the list and fills the command registry from it at startup.

use serenity::async_trait;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::{
        command::CommandSchema,
        interaction::{Argument, Invocation, Reply},
    },
    state::BotState,
};

pub mod info;
pub mod inspect;
pub mod ping;

/// Reply channel of a single interaction.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Acknowledges the interaction with a non-ephemeral deferred reply.
    async fn defer(&self) -> Result<(), AppError>;

    /// Sends a follow-up message to the deferred interaction.
    async fn reply(&self, reply: Reply) -> Result<(), AppError>;
}

/// Everything a command handler gets for one invocation.
pub struct CommandContext<'a> {
    pub state: &'a BotState,
    pub invocation: &'a Invocation,
    /// Option values flattened in payload order, sub-command names first.
    pub arguments: Vec<Argument>,
    pub responder: &'a dyn Responder,
}

impl CommandContext<'_> {
    pub async fn reply(&self, reply: Reply) -> Result<(), AppError> {
        self.responder.reply(reply).await
    }
}

/// A slash or context-menu command.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Schema registered with Discord; its name is the registry key.
    fn schema(&self) -> CommandSchema;

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), AppError>;
}

/// Commands registered at startup.
pub fn all() -> Vec<Arc<dyn SlashCommand>> {
    vec![
        Arc::new(ping::Ping),
        Arc::new(info::Info),
        Arc::new(inspect::Inspect),
    ]
}
