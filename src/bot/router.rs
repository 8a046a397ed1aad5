//! Interaction router.
//!
//! Resolves the handler for one `Invocation` from the command registry, flattens its
//! option tree into positional arguments, and runs the handler. Unknown commands and
//! handler failures are reported to the invoking user with a generic reply; they never
//! escape the router.

use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    bot::command::{CommandContext, Responder},
    model::interaction::{Argument, Invocation, InvocationKind, InvocationOption, OptionValue, Reply},
    state::BotState,
};

/// Reply sent when a command cannot be resolved or its handler fails.
pub const GENERIC_ERROR_REPLY: &str = "An error has occurred";

/// What happened to a routed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The handler ran to completion.
    Handled,
    /// No command is registered under the invoked name.
    UnknownCommand,
    /// The handler returned an error.
    Failed,
    /// The invocation kind is not routed.
    Ignored,
}

pub struct InteractionRouter {
    state: Arc<BotState>,
}

impl InteractionRouter {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    /// Routes one invocation to its command handler.
    ///
    /// Slash and context-menu commands share the same pipeline: defer the reply,
    /// resolve the handler, flatten the options, run the handler. Deferral failures
    /// are logged and ignored; the follow-up is still attempted.
    ///
    /// # Arguments
    /// - `invocation` - Transport-neutral interaction payload
    /// - `responder` - Reply channel of the interaction
    ///
    /// # Returns
    /// - `RouteOutcome` - How routing ended; every non-`Handled` outcome except
    ///   `Ignored` has already been reported to the user
    pub async fn route(&self, invocation: Invocation, responder: &dyn Responder) -> RouteOutcome {
        if invocation.kind == InvocationKind::Other {
            tracing::trace!("Ignoring {} invocation of unsupported kind", invocation.command_name);
            return RouteOutcome::Ignored;
        }

        if let Err(e) = responder.defer().await {
            tracing::debug!("Failed to defer reply for {}: {}", invocation.command_name, e);
        }

        let Some(command) = self.state.commands.get(&invocation.command_name) else {
            tracing::warn!(
                "Received {:?} invocation for unknown command {}",
                invocation.kind,
                invocation.command_name
            );
            report_error(responder).await;
            return RouteOutcome::UnknownCommand;
        };

        let arguments = flatten_arguments(&invocation.options);

        tracing::debug!(
            "User {} invoked {} with {} arguments",
            invocation.user_id,
            invocation.command_name,
            arguments.len()
        );

        let result = command
            .run(CommandContext {
                state: &self.state,
                invocation: &invocation,
                arguments,
                responder,
            })
            .await;

        match result {
            Ok(()) => RouteOutcome::Handled,
            Err(e) => {
                tracing::error!("Command {} failed: {}", invocation.command_name, e);
                report_error(responder).await;
                RouteOutcome::Failed
            }
        }
    }
}

/// Routes an invocation inside its own task.
///
/// A panicking handler only takes down its own task. The panic is logged and the
/// user still gets the generic error reply.
///
/// # Returns
/// - `Some(RouteOutcome)` - Routing finished
/// - `None` - The handler panicked or the task was cancelled
pub async fn dispatch_isolated<R>(
    router: Arc<InteractionRouter>,
    invocation: Invocation,
    responder: Arc<R>,
) -> Option<RouteOutcome>
where
    R: Responder + 'static,
{
    let command_name = invocation.command_name.clone();
    let task_responder = responder.clone();
    let task = tokio::spawn(async move { router.route(invocation, task_responder.as_ref()).await });

    match task.await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            tracing::error!("Handler for {} aborted: {}", command_name, e);
            report_error(responder.as_ref()).await;
            None
        }
    }
}

/// Flattens an option tree into positional arguments.
///
/// Options are visited in payload order. A sub-command (or group) contributes its
/// name followed by the flattening of its nested options; any other option
/// contributes its value. Options without a value contribute nothing.
pub fn flatten_arguments(options: &[InvocationOption]) -> Vec<Argument> {
    let mut arguments = Vec::new();
    for option in options {
        push_option(option, &mut arguments);
    }
    arguments
}

fn push_option(option: &InvocationOption, arguments: &mut Vec<Argument>) {
    match &option.value {
        OptionValue::SubCommand(nested) | OptionValue::SubCommandGroup(nested) => {
            arguments.push(Argument::Text(option.name.clone()));
            for nested in nested {
                push_option(nested, arguments);
            }
        }
        OptionValue::Value(value) => arguments.push(value.clone()),
        OptionValue::Empty => {}
    }
}

async fn report_error(responder: &dyn Responder) {
    if let Err(e) = responder.reply(Reply::text(GENERIC_ERROR_REPLY)).await {
        tracing::error!("Failed to send error reply: {}", e);
    }
}

#[cfg(test)]
mod test;
