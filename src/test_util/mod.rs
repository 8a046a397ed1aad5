//! Shared test utilities.
//!
//! `mock` provides recording implementations of the crate's seams (`CommandApi`,
//! `Responder`, `SlashCommand`, `EventListener`); `factory` builds invocations and
//! bot state for router, loader and registrar tests.

pub mod factory;
pub mod mock;
