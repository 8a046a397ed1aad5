use serenity::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    bot::{
        command::{CommandContext, Responder, SlashCommand},
        event::EventListener,
    },
    data::discord::CommandApi,
    error::AppError,
    model::{
        command::{CommandSchema, CommandScope, RegisteredCommand},
        event::EventPayload,
        interaction::{Argument, Reply},
    },
    state::BotState,
};

fn transport_error() -> AppError {
    AppError::InternalError("simulated transport failure".to_string())
}

/// In-memory command endpoint that records every call.
///
/// A successful put replaces the remote set, assigning ids from 1 upwards in
/// schema order, so repeated syncs can be compared.
#[derive(Default)]
pub struct MockCommandApi {
    registered: Mutex<Vec<RegisteredCommand>>,
    puts: Mutex<Vec<(CommandScope, Vec<CommandSchema>)>>,
    deletes: Mutex<Vec<(CommandScope, u64)>>,
    fail_put: bool,
    fail_list: bool,
    fail_delete: Vec<u64>,
}

impl MockCommandApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `(id, name)` commands already registered.
    pub fn with_registered(commands: Vec<(u64, &str)>) -> Self {
        let api = Self::new();
        *api.registered.lock().unwrap() = commands
            .into_iter()
            .map(|(id, name)| RegisteredCommand {
                id,
                name: name.to_string(),
            })
            .collect();
        api
    }

    pub fn fail_put(mut self) -> Self {
        self.fail_put = true;
        self
    }

    pub fn fail_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn fail_delete(mut self, command_id: u64) -> Self {
        self.fail_delete.push(command_id);
        self
    }

    pub fn registered(&self) -> Vec<RegisteredCommand> {
        self.registered.lock().unwrap().clone()
    }

    pub fn puts(&self) -> Vec<(CommandScope, Vec<CommandSchema>)> {
        self.puts.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<(CommandScope, u64)> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandApi for MockCommandApi {
    async fn put_commands(
        &self,
        scope: CommandScope,
        schemas: &[CommandSchema],
    ) -> Result<usize, AppError> {
        self.puts.lock().unwrap().push((scope, schemas.to_vec()));

        if self.fail_put {
            return Err(transport_error());
        }

        *self.registered.lock().unwrap() = schemas
            .iter()
            .enumerate()
            .map(|(index, schema)| RegisteredCommand {
                id: index as u64 + 1,
                name: schema.name.clone(),
            })
            .collect();

        Ok(schemas.len())
    }

    async fn list_commands(&self, _scope: CommandScope) -> Result<Vec<RegisteredCommand>, AppError> {
        if self.fail_list {
            return Err(transport_error());
        }

        Ok(self.registered())
    }

    async fn delete_command(&self, scope: CommandScope, command_id: u64) -> Result<(), AppError> {
        self.deletes.lock().unwrap().push((scope, command_id));

        // Yield so sibling deletions interleave with this one.
        tokio::task::yield_now().await;

        if self.fail_delete.contains(&command_id) {
            return Err(transport_error());
        }

        self.registered
            .lock()
            .unwrap()
            .retain(|command| command.id != command_id);

        Ok(())
    }
}

/// Responder that records deferrals and replies.
#[derive(Default)]
pub struct RecordingResponder {
    defers: AtomicUsize,
    replies: Mutex<Vec<Reply>>,
    fail_defer: bool,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_defer() -> Self {
        Self {
            fail_defer: true,
            ..Self::default()
        }
    }

    pub fn defers(&self) -> usize {
        self.defers.load(Ordering::SeqCst)
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn defer(&self) -> Result<(), AppError> {
        self.defers.fetch_add(1, Ordering::SeqCst);

        if self.fail_defer {
            return Err(transport_error());
        }

        Ok(())
    }

    async fn reply(&self, reply: Reply) -> Result<(), AppError> {
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }
}

enum Behaviour {
    Succeed,
    Fail,
    Panic,
}

/// Command that counts its invocations and remembers the last arguments.
pub struct CountingCommand {
    schema: CommandSchema,
    behaviour: Behaviour,
    calls: AtomicUsize,
    last_arguments: Mutex<Option<Vec<Argument>>>,
}

impl CountingCommand {
    fn with_behaviour(name: &str, behaviour: Behaviour) -> Self {
        Self {
            schema: CommandSchema::slash(name, "Test command"),
            behaviour,
            calls: AtomicUsize::new(0),
            last_arguments: Mutex::new(None),
        }
    }

    pub fn new(name: &str) -> Self {
        Self::with_behaviour(name, Behaviour::Succeed)
    }

    /// Command whose handler returns an error.
    pub fn failing(name: &str) -> Self {
        Self::with_behaviour(name, Behaviour::Fail)
    }

    /// Command whose handler panics.
    pub fn panicking(name: &str) -> Self {
        Self::with_behaviour(name, Behaviour::Panic)
    }

    pub fn with_schema(schema: CommandSchema) -> Self {
        Self {
            schema,
            ..Self::new("unused")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_arguments(&self) -> Option<Vec<Argument>> {
        self.last_arguments.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlashCommand for CountingCommand {
    fn schema(&self) -> CommandSchema {
        self.schema.clone()
    }

    async fn run(&self, ctx: CommandContext<'_>) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_arguments.lock().unwrap() = Some(ctx.arguments);

        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => Err(AppError::InternalError("handler failed".to_string())),
            Behaviour::Panic => panic!("handler panicked"),
        }
    }
}

/// Event listener that counts its runs.
pub struct CountingListener {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl CountingListener {
    pub fn new(calls: Arc<AtomicUsize>) -> Self {
        Self { calls, fail: false }
    }

    /// Listener that counts its runs and then returns an error.
    pub fn failing(calls: Arc<AtomicUsize>) -> Self {
        Self { calls, fail: true }
    }
}

#[async_trait]
impl EventListener for CountingListener {
    async fn run(&self, _state: &BotState, _payload: &EventPayload) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(transport_error());
        }

        Ok(())
    }
}
