//! Discord bot: gateway adapter, interaction router and module loader.
//!
//! Commands and events are plain Rust types listed in `command::all()` and
//! `event::all()`. At startup the loader validates both lists and fills the
//! registries held by `BotState`. The gateway adapter in `handler` converts
//! serenity events into signals for the event registry and interactions into
//! `Invocation`s for the router.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events and interactions in guilds
//! - `GUILD_MEMBERS` - Resolve invoking members from the cache (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod event;
pub mod handler;
pub mod loader;
pub mod registry;
pub mod router;
pub mod start;
