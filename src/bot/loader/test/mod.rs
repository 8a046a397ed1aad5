use crate::{
    bot::{
        command::{self, SlashCommand},
        event,
        loader::{load_commands, load_events},
        registry::{CommandRegistry, EventBuilder, EventRegistry},
    },
    error::load::LoadError,
    model::{
        command::{CommandKind, CommandOptionSchema, CommandSchema},
        event::{Emitter, Trigger},
    },
    test_util::{factory, mock::CountingListener},
};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
