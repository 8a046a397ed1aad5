//! Domain models shared by the router, loader and registrar.
//!
//! Nothing in here talks to Discord; conversion from serenity types happens at the
//! gateway adapter and the `CommandApi` implementation.

pub mod command;
pub mod event;
pub mod interaction;
