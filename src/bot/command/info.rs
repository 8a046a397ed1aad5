//! `/info` game-data lookup command.
//!
//! One sub-command per cached table, each taking the record's key as its only
//! option. The first positional argument is therefore the sub-command name and the
//! second the key to look up.

use serde_json::Value;
use serenity::async_trait;

use crate::{
    bot::command::{CommandContext, SlashCommand},
    data::game_data::GameDataKind,
    error::AppError,
    model::{
        command::{CommandOptionSchema, CommandSchema},
        interaction::{Reply, ReplyEmbed},
    },
};

/// Discord embed limit is 25 fields; records are kept well below it.
const MAX_EMBED_FIELDS: usize = 10;
const INFO_COLOUR: u32 = 0xf1c40f;

pub struct Info;

#[async_trait]
impl SlashCommand for Info {
    fn schema(&self) -> CommandSchema {
        GameDataKind::ALL
            .into_iter()
            .fold(CommandSchema::slash("info", "Look up game data"), |schema, kind| {
                schema.option(
                    CommandOptionSchema::sub_command(
                        kind.label(),
                        format!("Look up a {}", kind.label()),
                    )
                    .option(
                        CommandOptionSchema::string(
                            kind.key_field(),
                            format!("The {}'s {}", kind.label(), kind.key_field()),
                        )
                        .required(true),
                    ),
                )
            })
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), AppError> {
        let (Some(label), Some(key)) = (
            ctx.arguments.first().and_then(|argument| argument.as_str()),
            ctx.arguments.get(1),
        ) else {
            return Err(AppError::InternalError(
                "/info invoked without a sub-command and key".to_string(),
            ));
        };

        let kind = GameDataKind::from_label(label).ok_or_else(|| {
            AppError::InternalError(format!("Unknown /info sub-command {}", label))
        })?;
        let key = key.to_string();

        let reply = match ctx.state.game_data.get(kind, &key) {
            Some(record) => Reply::embed(record_embed(&key, record)),
            None => Reply::text(format!("No {} named {} found.", kind.label(), key)),
        };

        ctx.reply(reply).await
    }
}

/// Builds an embed from a cached record.
///
/// `name` becomes the title and `description` the body; every other scalar or
/// string-array field becomes an inline field, in key order.
fn record_embed(key: &str, record: &Value) -> ReplyEmbed {
    let title = record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(key)
        .to_string();
    let description = record
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut fields: Vec<(String, String, bool)> = record
        .as_object()
        .into_iter()
        .flatten()
        .filter(|(field, _)| *field != "name" && *field != "description")
        .filter_map(|(field, value)| field_value(value).map(|value| (field.clone(), value, true)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields.truncate(MAX_EMBED_FIELDS);

    ReplyEmbed {
        title,
        description,
        colour: INFO_COLOUR,
        fields,
    }
}

fn field_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let items: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!items.is_empty()).then(|| items.join(", "))
        }
        _ => None,
    }
}
