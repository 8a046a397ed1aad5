use serenity::async_trait;

use crate::{
    bot::command::{CommandContext, SlashCommand},
    error::AppError,
    model::{
        command::{CommandKind, CommandSchema},
        interaction::Reply,
    },
};

/// "Inspect" user context-menu command.
pub struct Inspect;

#[async_trait]
impl SlashCommand for Inspect {
    fn schema(&self) -> CommandSchema {
        CommandSchema::context_menu("Inspect", CommandKind::User)
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), AppError> {
        let target_id = ctx.invocation.target_id.ok_or_else(|| {
            AppError::InternalError("Inspect invoked without a target user".to_string())
        })?;

        let inspector = ctx
            .invocation
            .member
            .as_ref()
            .map(|member| member.display_name.clone())
            .unwrap_or_else(|| format!("<@{}>", ctx.invocation.user_id));

        ctx.reply(Reply::text(format!(
            "Paimon takes a close look at <@{}> for {}.",
            target_id, inspector
        )))
        .await
    }
}
