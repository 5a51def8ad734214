use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::cmd::TickerId;

/// Raw messages from external sources (input, ticker, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Render,
    Resize(u16, u16),
    Quit,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Ticker events
    TimerTick(TickerId),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Render | RawMsg::TimerTick(_))
    }
}
