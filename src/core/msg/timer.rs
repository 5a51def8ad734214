use serde::{Deserialize, Serialize};

use crate::core::cmd::TickerId;

/// Messages handled by the TimerController
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMsg {
    /// The control button was activated (start, pause or resume)
    ControlActivate,
    /// The reset button was activated
    ResetActivate,
    /// A ticker fired; only the active ticker's id is honoured
    Tick(TickerId),
}
