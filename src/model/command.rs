//! Application-command schemas and registration scope.
//!
//! `CommandSchema` is the transport-neutral description of a slash or context-menu
//! command. It serializes to the JSON body Discord's bulk-overwrite endpoint expects,
//! and deserializes back from it unchanged, so re-registering an unchanged schema set
//! always produces the same remote state.

use serde::{Deserialize, Serialize};

/// Where a schema set is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// Every guild the bot is in, plus DMs.
    Global,
    /// A single guild, identified by its snowflake.
    Guild(u64),
}

impl CommandScope {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Guild(_) => "guild",
        }
    }
}

/// Discord's application command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CommandKind {
    ChatInput,
    User,
    Message,
}

impl From<CommandKind> for u8 {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::ChatInput => 1,
            CommandKind::User => 2,
            CommandKind::Message => 3,
        }
    }
}

impl TryFrom<u8> for CommandKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ChatInput),
            2 => Ok(Self::User),
            3 => Ok(Self::Message),
            other => Err(format!("unknown application command type {}", other)),
        }
    }
}

fn chat_input() -> CommandKind {
    CommandKind::ChatInput
}

/// Discord's application command option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OptionKind {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

impl From<OptionKind> for u8 {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::SubCommand => 1,
            OptionKind::SubCommandGroup => 2,
            OptionKind::String => 3,
            OptionKind::Integer => 4,
            OptionKind::Boolean => 5,
            OptionKind::User => 6,
            OptionKind::Channel => 7,
            OptionKind::Role => 8,
            OptionKind::Mentionable => 9,
            OptionKind::Number => 10,
            OptionKind::Attachment => 11,
        }
    }
}

impl TryFrom<u8> for OptionKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            10 => Self::Number,
            11 => Self::Attachment,
            other => return Err(format!("unknown application command option type {}", other)),
        })
    }
}

/// Declared schema of one application command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSchema {
    pub name: String,
    /// Empty for context-menu commands, which Discord requires to have no description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", default = "chat_input")]
    pub kind: CommandKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSchema>,
}

impl CommandSchema {
    /// Starts a slash (chat input) command schema.
    pub fn slash(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: CommandKind::ChatInput,
            options: Vec::new(),
        }
    }

    /// Starts a context-menu command schema shown on users or messages.
    pub fn context_menu(name: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: CommandOptionSchema) -> Self {
        self.options.push(option);
        self
    }

    pub fn is_context_menu(&self) -> bool {
        self.kind != CommandKind::ChatInput
    }
}

/// Declared schema of one command option, possibly a sub-command with nested options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionSchema {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSchema>,
}

impl CommandOptionSchema {
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
            options: Vec::new(),
        }
    }

    pub fn sub_command(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(OptionKind::SubCommand, name, description)
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(OptionKind::String, name, description)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn option(mut self, option: CommandOptionSchema) -> Self {
        self.options.push(option);
        self
    }
}

/// A command as Discord reports it after registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredCommand {
    pub id: u64,
    pub name: String,
}

/// Outcome of clearing a scope's registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearSummary {
    pub deleted: usize,
    pub failed: usize,
}
