//! Event descriptor capabilities and payloads.

/// Source that publishes a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emitter {
    /// The Discord gateway client.
    Gateway,
    /// The operating-system process (Ctrl-C and friends).
    Process,
}

pub const READY: &str = "ready";
pub const GUILD_CREATE: &str = "guildCreate";
pub const SHUTDOWN: &str = "shutdown";

impl Emitter {
    /// Names of the signals this emitter publishes.
    pub fn signals(&self) -> &'static [&'static str] {
        match self {
            Self::Gateway => &[READY, GUILD_CREATE],
            Self::Process => &[SHUTDOWN],
        }
    }

    pub fn emits(&self, name: &str) -> bool {
        self.signals().contains(&name)
    }
}

/// How often a subscribed listener runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// On every emission.
    On,
    /// On the first emission only.
    Once,
}

/// Data published alongside a signal.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Ready {
        user_name: String,
        guild_count: usize,
    },
    GuildCreate {
        guild_id: u64,
        name: String,
        member_count: u64,
        is_new: bool,
    },
    Shutdown,
}
