//! Transport-neutral interaction models.
//!
//! The gateway adapter converts serenity's `CommandInteraction` into an
//! `Invocation` before routing, so the router and every command handler work on
//! plain data that tests can construct directly.

use std::fmt;

/// Which kind of application command was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// Slash command invoked from the command UI.
    Command,
    /// User or message context-menu command.
    ContextMenu,
    /// Any other application command type; never routed.
    Other,
}

/// Guild member who invoked the command.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokingMember {
    pub user_id: u64,
    pub username: String,
    /// Guild nickname if set, otherwise the global display name or username.
    pub display_name: String,
}

/// One inbound application-command interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub kind: InvocationKind,
    pub command_name: String,
    pub user_id: u64,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Option tree in payload order.
    pub options: Vec<InvocationOption>,
    /// User or message the context-menu command was invoked on.
    pub target_id: Option<u64>,
    /// Resolved guild member of the invoking user, absent in DMs.
    pub member: Option<InvokingMember>,
}

/// One option of the invocation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOption {
    pub name: String,
    pub value: OptionValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    SubCommand(Vec<InvocationOption>),
    SubCommandGroup(Vec<InvocationOption>),
    Value(Argument),
    /// Autocomplete placeholders and option types this bot does not understand.
    Empty,
}

/// A positional argument handed to command handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// User, channel, role, mentionable or attachment snowflake.
    Id(u64),
}

impl Argument {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Follow-up message sent back to the invoking user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<ReplyEmbed>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
        }
    }

    pub fn embed(embed: ReplyEmbed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyEmbed {
    pub title: String,
    pub description: Option<String>,
    pub colour: u32,
    /// `(name, value, inline)` triples in display order.
    pub fields: Vec<(String, String, bool)>,
}
