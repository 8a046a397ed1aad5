use std::sync::Arc;

use crate::{
    bot::{
        command::SlashCommand,
        registry::{CommandRegistry, EventRegistry},
    },
    data::{discord::CommandApi, game_data::GameData},
    model::{
        command::{CommandSchema, CommandScope},
        interaction::{Argument, Invocation, InvocationKind, InvocationOption, OptionValue},
    },
    state::BotState,
    test_util::mock::{CountingCommand, MockCommandApi},
};

pub const USER_ID: u64 = 268011212894232577;
pub const GUILD_ID: u64 = 780394213200232491;
pub const CHANNEL_ID: u64 = 780394213200232494;

pub fn text(value: &str) -> Argument {
    Argument::Text(value.to_string())
}

pub fn value_option(name: &str, value: Argument) -> InvocationOption {
    InvocationOption {
        name: name.to_string(),
        value: OptionValue::Value(value),
    }
}

pub fn empty_option(name: &str) -> InvocationOption {
    InvocationOption {
        name: name.to_string(),
        value: OptionValue::Empty,
    }
}

pub fn sub_command(name: &str, options: Vec<InvocationOption>) -> InvocationOption {
    InvocationOption {
        name: name.to_string(),
        value: OptionValue::SubCommand(options),
    }
}

pub fn sub_command_group(name: &str, options: Vec<InvocationOption>) -> InvocationOption {
    InvocationOption {
        name: name.to_string(),
        value: OptionValue::SubCommandGroup(options),
    }
}

/// Slash-command invocation from a guild channel.
pub fn slash_invocation(name: &str, options: Vec<InvocationOption>) -> Invocation {
    Invocation {
        kind: InvocationKind::Command,
        command_name: name.to_string(),
        user_id: USER_ID,
        guild_id: Some(GUILD_ID),
        channel_id: CHANNEL_ID,
        options,
        target_id: None,
        member: None,
    }
}

/// Context-menu invocation on the given target.
pub fn context_menu_invocation(name: &str, target_id: Option<u64>) -> Invocation {
    Invocation {
        kind: InvocationKind::ContextMenu,
        target_id,
        ..slash_invocation(name, Vec::new())
    }
}

pub fn counting_command(name: &str) -> Arc<dyn SlashCommand> {
    Arc::new(CountingCommand::new(name))
}

pub fn command_with_schema(schema: CommandSchema) -> Arc<dyn SlashCommand> {
    Arc::new(CountingCommand::with_schema(schema))
}

fn registry_with(commands: Vec<Arc<dyn SlashCommand>>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for command in commands {
        registry.insert(command);
    }
    registry
}

/// Bot state with the given commands and game data, no events, global scope.
pub fn state_with(commands: Vec<Arc<dyn SlashCommand>>, game_data: GameData) -> BotState {
    BotState::new(
        registry_with(commands),
        EventRegistry::new(),
        game_data,
        Arc::new(MockCommandApi::new()),
        CommandScope::Global,
    )
}

pub fn shared_state(commands: Vec<Arc<dyn SlashCommand>>) -> Arc<BotState> {
    Arc::new(state_with(commands, GameData::new()))
}

pub fn state_with_events(events: EventRegistry) -> BotState {
    BotState::new(
        CommandRegistry::new(),
        events,
        GameData::new(),
        Arc::new(MockCommandApi::new()),
        CommandScope::Global,
    )
}

pub fn state_with_api(
    commands: Vec<Arc<dyn SlashCommand>>,
    api: Arc<dyn CommandApi>,
    scope: CommandScope,
) -> BotState {
    BotState::new(
        registry_with(commands),
        EventRegistry::new(),
        GameData::new(),
        api,
        scope,
    )
}
