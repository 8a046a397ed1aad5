use chrono::Utc;
use serenity::async_trait;

use crate::{
    bot::command::{CommandContext, SlashCommand},
    error::AppError,
    model::{command::CommandSchema, interaction::Reply},
};

/// `/ping`, replies with the bot's uptime.
pub struct Ping;

#[async_trait]
impl SlashCommand for Ping {
    fn schema(&self) -> CommandSchema {
        CommandSchema::slash("ping", "Check whether Paimon is awake")
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), AppError> {
        let uptime = (Utc::now() - ctx.state.started_at).num_seconds().max(0);

        ctx.reply(Reply::text(format!(
            "Pong! Paimon has been awake for {}h {}m {}s.",
            uptime / 3600,
            uptime % 3600 / 60,
            uptime % 60
        )))
        .await
    }
}
