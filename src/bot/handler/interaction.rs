//! Interaction event handler.
//!
//! Converts serenity's `CommandInteraction` into a transport-neutral `Invocation`
//! and hands it to the router in its own task. Component, modal and autocomplete
//! interactions are not routed.

use dioxus_logger::tracing;
use serenity::all::{
    CommandDataOption, CommandDataOptionValue, CommandInteraction, CommandType, Context,
    CreateEmbed, CreateInteractionResponseFollowup, Interaction, Member,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::{
        command::Responder,
        router::{dispatch_isolated, InteractionRouter},
    },
    error::AppError,
    model::interaction::{
        Argument, Invocation, InvocationKind, InvocationOption, InvokingMember, OptionValue, Reply,
    },
};

/// Routes an application-command interaction.
///
/// # Arguments
/// - `router` - Shared interaction router
/// - `ctx` - Discord context providing the HTTP client and member cache
/// - `interaction` - Raw interaction received from the gateway
pub async fn handle_interaction_create(
    router: Arc<InteractionRouter>,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        tracing::trace!("Ignoring non-command interaction");
        return;
    };

    let invocation = to_invocation(&ctx, &command);
    let responder = Arc::new(InteractionResponder {
        http: ctx.http.clone(),
        interaction: command,
    });

    dispatch_isolated(router, invocation, responder).await;
}

/// Converts a command interaction into an `Invocation`.
///
/// The invoking member comes from the interaction payload when Discord includes
/// it, otherwise from the member cache.
fn to_invocation(ctx: &Context, command: &CommandInteraction) -> Invocation {
    let kind = match command.data.kind {
        CommandType::ChatInput => InvocationKind::Command,
        CommandType::User | CommandType::Message => InvocationKind::ContextMenu,
        _ => InvocationKind::Other,
    };

    let member = match (&command.member, command.guild_id) {
        (Some(member), _) => Some(invoking_member(member)),
        (None, Some(guild_id)) => ctx.cache.guild(guild_id).and_then(|guild| {
            guild
                .members
                .get(&command.user.id)
                .map(invoking_member)
        }),
        (None, None) => None,
    };

    Invocation {
        kind,
        command_name: command.data.name.clone(),
        user_id: command.user.id.get(),
        guild_id: command.guild_id.map(|id| id.get()),
        channel_id: command.channel_id.get(),
        options: command.data.options.iter().map(to_option).collect(),
        target_id: command.data.target_id.map(|id| id.get()),
        member,
    }
}

fn to_option(option: &CommandDataOption) -> InvocationOption {
    let value = match &option.value {
        CommandDataOptionValue::SubCommand(nested) => {
            OptionValue::SubCommand(nested.iter().map(to_option).collect())
        }
        CommandDataOptionValue::SubCommandGroup(nested) => {
            OptionValue::SubCommandGroup(nested.iter().map(to_option).collect())
        }
        CommandDataOptionValue::String(value) => OptionValue::Value(Argument::Text(value.clone())),
        CommandDataOptionValue::Integer(value) => OptionValue::Value(Argument::Integer(*value)),
        CommandDataOptionValue::Number(value) => OptionValue::Value(Argument::Number(*value)),
        CommandDataOptionValue::Boolean(value) => OptionValue::Value(Argument::Boolean(*value)),
        CommandDataOptionValue::User(id) => OptionValue::Value(Argument::Id(id.get())),
        CommandDataOptionValue::Channel(id) => OptionValue::Value(Argument::Id(id.get())),
        CommandDataOptionValue::Role(id) => OptionValue::Value(Argument::Id(id.get())),
        CommandDataOptionValue::Mentionable(id) => OptionValue::Value(Argument::Id(id.get())),
        CommandDataOptionValue::Attachment(id) => OptionValue::Value(Argument::Id(id.get())),
        _ => OptionValue::Empty,
    };

    InvocationOption {
        name: option.name.clone(),
        value,
    }
}

fn invoking_member(member: &Member) -> InvokingMember {
    InvokingMember {
        user_id: member.user.id.get(),
        username: member.user.name.clone(),
        display_name: member.display_name().to_string(),
    }
}

/// `Responder` backed by the interaction's webhook token.
pub struct InteractionResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

#[async_trait]
impl Responder for InteractionResponder {
    async fn defer(&self) -> Result<(), AppError> {
        self.interaction.defer(&*self.http).await?;

        Ok(())
    }

    async fn reply(&self, reply: Reply) -> Result<(), AppError> {
        let mut followup = CreateInteractionResponseFollowup::new();

        if let Some(content) = reply.content {
            followup = followup.content(content);
        }

        if let Some(embed) = reply.embed {
            let mut builder = CreateEmbed::new().title(embed.title).colour(embed.colour);
            if let Some(description) = embed.description {
                builder = builder.description(description);
            }
            builder = builder.fields(embed.fields);
            followup = followup.embed(builder);
        }

        self.interaction
            .create_followup(&*self.http, followup)
            .await?;

        Ok(())
    }
}
