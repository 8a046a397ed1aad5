//! Startup loader for the command and event registries.
//!
//! Both loaders are all-or-nothing: every descriptor is validated before the first
//! one is inserted, so a failed load leaves the registry exactly as it was.

use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    bot::{
        command::SlashCommand,
        registry::{CommandRegistry, EventBuilder, EventRegistry},
    },
    error::load::LoadError,
    model::command::{CommandOptionSchema, CommandSchema},
};

const MAX_NAME_LENGTH: usize = 32;
const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Validates and registers the command list.
///
/// # Arguments
/// - `registry` - Command registry to fill
/// - `commands` - Commands to register, in schema registration order
///
/// # Returns
/// - `Ok(usize)` - Number of commands loaded
/// - `Err(LoadError::InvalidCommand)` - A schema would be rejected by Discord; nothing
///   was registered
pub fn load_commands(
    registry: &mut CommandRegistry,
    commands: Vec<Arc<dyn SlashCommand>>,
) -> Result<usize, LoadError> {
    for command in &commands {
        validate_schema(&command.schema())?;
    }

    let count = commands.len();
    for command in commands {
        tracing::debug!("Loaded command {}", command.schema().name);
        registry.insert(command);
    }

    Ok(count)
}

/// Builds every event descriptor and subscribes them.
///
/// # Arguments
/// - `registry` - Event registry to fill
/// - `builders` - Unvalidated event descriptors
///
/// # Returns
/// - `Ok(usize)` - Number of events subscribed
/// - `Err(LoadError)` - A descriptor is missing a capability or names an unknown
///   signal; nothing was subscribed
pub fn load_events(
    registry: &mut EventRegistry,
    builders: Vec<EventBuilder>,
) -> Result<usize, LoadError> {
    let descriptors = builders
        .into_iter()
        .map(EventBuilder::build)
        .collect::<Result<Vec<_>, _>>()?;

    let count = descriptors.len();
    for descriptor in descriptors {
        tracing::debug!(
            "Subscribed {} to {:?} ({:?})",
            descriptor.name(),
            descriptor.emitter(),
            descriptor.trigger()
        );
        registry.insert(descriptor);
    }

    Ok(count)
}

fn validate_schema(schema: &CommandSchema) -> Result<(), LoadError> {
    let invalid = |reason: String| LoadError::InvalidCommand {
        name: schema.name.clone(),
        reason,
    };

    if schema.name.is_empty() || schema.name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "name must be 1-{} characters",
            MAX_NAME_LENGTH
        )));
    }

    if schema.is_context_menu() {
        if !schema.description.is_empty() || !schema.options.is_empty() {
            return Err(invalid(
                "context-menu commands take no description or options".to_string(),
            ));
        }
        return Ok(());
    }

    if !is_valid_slash_name(&schema.name) {
        return Err(invalid(
            "slash command names may not contain uppercase letters, spaces or symbols other than '-' and '_'"
                .to_string(),
        ));
    }
    validate_description(&schema.description).map_err(invalid)?;

    for option in &schema.options {
        validate_option(option).map_err(invalid)?;
    }

    Ok(())
}

fn validate_option(option: &CommandOptionSchema) -> Result<(), String> {
    if !is_valid_slash_name(&option.name) {
        return Err(format!("option name '{}' is invalid", option.name));
    }
    validate_description(&option.description)
        .map_err(|reason| format!("option {}: {}", option.name, reason))?;

    for nested in &option.options {
        validate_option(nested)?;
    }

    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    let length = description.chars().count();
    if length == 0 || length > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "description must be 1-{} characters",
            MAX_DESCRIPTION_LENGTH
        ));
    }

    Ok(())
}

fn is_valid_slash_name(name: &str) -> bool {
    let length = name.chars().count();
    (1..=MAX_NAME_LENGTH).contains(&length)
        && name
            .chars()
            .all(|c| c == '-' || c == '_' || (c.is_alphanumeric() && !c.is_uppercase()))
}

#[cfg(test)]
mod test;
