use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one repeating ticker task.
///
/// Ids are handed out by the timer controller and never reused, so a tick that
/// was queued before its ticker was cancelled can be told apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickerId(pub u64);

impl fmt::Display for TickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticker#{}", self.0)
    }
}

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the update function asks the runtime to perform.
/// Commands are executed in the order they were returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Begin a repeating ticker that reports `RawMsg::TimerTick(id)` every `period_ms`
    StartTicker { id: TickerId, period_ms: u64 },
    /// Stop a ticker; no further ticks are emitted for `id`
    CancelTicker { id: TickerId },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    /// Whether the command touches the ticker service
    pub fn is_ticker(&self) -> bool {
        matches!(self, Cmd::StartTicker { .. } | Cmd::CancelTicker { .. })
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::StartTicker { .. } => "StartTicker",
            Cmd::CancelTicker { .. } => "CancelTicker",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}
