use thiserror::Error;

use crate::model::event::Emitter;

/// Startup failures while building the command and event registries.
///
/// Every variant is fatal: a registry that cannot be built completely is never
/// handed to the gateway.
#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    /// An event descriptor is missing one of `emitter`, `type` or `run`.
    #[error("Event {event} is missing required capability `{capability}`")]
    MissingCapability {
        /// Name of the event being built
        event: String,
        /// The capability that was never provided
        capability: &'static str,
    },

    /// The event name is not a signal its emitter ever publishes.
    #[error("Event {event} is not a signal emitted by the {emitter:?} emitter")]
    UnknownSignal {
        /// Name of the event being built
        event: String,
        /// Emitter the event tried to subscribe to
        emitter: Emitter,
    },

    /// A command schema would be rejected by Discord.
    #[error("Command {name} has an invalid schema: {reason}")]
    InvalidCommand {
        /// Name of the offending command
        name: String,
        /// What is wrong with the schema
        reason: String,
    },
}
