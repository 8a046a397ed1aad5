//! Command and event registries.
//!
//! Both registries are filled by the loader before the bot state is shared and are
//! read-only afterwards. The event registry doubles as the dispatch table emitters
//! publish into: inserting a descriptor subscribes its listener.

use dioxus_logger::tracing;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{
    bot::{command::SlashCommand, event::EventListener},
    error::load::LoadError,
    model::{
        command::CommandSchema,
        event::{Emitter, EventPayload, Trigger},
    },
    state::BotState,
};

/// Commands keyed by name, plus the ordered schema sequence sent to Discord.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn SlashCommand>>,
    schemas: Vec<CommandSchema>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its schema name.
    ///
    /// A second command with the same name replaces the first, both in the lookup
    /// table and at the first command's position in the schema sequence.
    ///
    /// # Returns
    /// - `Some(command)` - The command that was replaced
    /// - `None` - The name was not registered before
    pub fn insert(&mut self, command: Arc<dyn SlashCommand>) -> Option<Arc<dyn SlashCommand>> {
        let schema = command.schema();

        match self
            .schemas
            .iter_mut()
            .find(|existing| existing.name == schema.name)
        {
            Some(existing) => {
                tracing::warn!("Command {} registered twice, last registration wins", schema.name);
                *existing = schema.clone();
            }
            None => self.schemas.push(schema.clone()),
        }

        self.commands.insert(schema.name, command)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.commands.get(name)
    }

    /// Schemas in registration order.
    pub fn schemas(&self) -> &[CommandSchema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A validated event subscription.
pub struct EventDescriptor {
    name: String,
    emitter: Emitter,
    trigger: Trigger,
    listener: Arc<dyn EventListener>,
    fired: AtomicBool,
}

impl EventDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

/// Collects the capabilities of an event before validation.
///
/// `build` fails unless `emitter`, `trigger` and `listener` were all provided and the
/// name is a signal the emitter publishes.
pub struct EventBuilder {
    name: String,
    emitter: Option<Emitter>,
    trigger: Option<Trigger>,
    listener: Option<Arc<dyn EventListener>>,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emitter: None,
            trigger: None,
            listener: None,
        }
    }

    pub fn emitter(mut self, emitter: Emitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn listener(mut self, listener: impl EventListener + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn build(self) -> Result<EventDescriptor, LoadError> {
        let missing = |capability| LoadError::MissingCapability {
            event: self.name.clone(),
            capability,
        };

        let emitter = self.emitter.ok_or_else(|| missing("emitter"))?;
        let trigger = self.trigger.ok_or_else(|| missing("type"))?;
        let listener = self.listener.clone().ok_or_else(|| missing("run"))?;

        if !emitter.emits(&self.name) {
            return Err(LoadError::UnknownSignal {
                event: self.name,
                emitter,
            });
        }

        Ok(EventDescriptor {
            name: self.name,
            emitter,
            trigger,
            listener,
            fired: AtomicBool::new(false),
        })
    }
}

/// Event descriptors keyed by signal name.
#[derive(Default)]
pub struct EventRegistry {
    events: HashMap<String, EventDescriptor>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a descriptor, replacing any previous one for the same signal.
    pub fn insert(&mut self, descriptor: EventDescriptor) -> Option<EventDescriptor> {
        self.events.insert(descriptor.name.clone(), descriptor)
    }

    pub fn get(&self, name: &str) -> Option<&EventDescriptor> {
        self.events.get(name)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Publishes a signal to its subscribed listener.
    ///
    /// The listener runs only if it subscribed to this emitter and, for `Once`
    /// triggers, has not run before. Listener errors are logged and never reach the
    /// emitter.
    ///
    /// # Arguments
    /// - `state` - Bot state handed to the listener
    /// - `emitter` - Source publishing the signal
    /// - `name` - Signal name
    /// - `payload` - Data published with the signal
    ///
    /// # Returns
    /// - `true` - A listener ran
    /// - `false` - No listener was subscribed, or a `Once` listener already ran
    pub async fn emit(
        &self,
        state: &BotState,
        emitter: Emitter,
        name: &str,
        payload: &EventPayload,
    ) -> bool {
        let Some(descriptor) = self.get(name) else {
            tracing::trace!("No listener subscribed to {:?} signal {}", emitter, name);
            return false;
        };

        if descriptor.emitter != emitter {
            return false;
        }

        if descriptor.trigger == Trigger::Once && descriptor.fired.swap(true, Ordering::SeqCst) {
            tracing::debug!("Skipping {} listener, it only runs once", name);
            return false;
        }

        if let Err(e) = descriptor.listener.run(state, payload).await {
            tracing::error!("Event {} failed: {}", name, e);
        }

        true
    }
}
