use serde::{Deserialize, Serialize};

pub mod field;
pub mod system;
pub mod timer;
pub mod ui;

use field::FieldMsg;
use system::SystemMsg;
use timer::TimerMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Timer operations (delegated to TimerController)
    Timer(TimerMsg),

    // Field editing (delegated to TimerController, which owns the fields)
    Field(FieldMsg),

    // Focus and overlays (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Timer(TimerMsg::Tick(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cmd::TickerId;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Timer(TimerMsg::Tick(TickerId(1))).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Timer(TimerMsg::ControlActivate).is_frequent());
        assert!(!Msg::Ui(UiMsg::FocusNext).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Timer(TimerMsg::ControlActivate),
            Msg::Timer(TimerMsg::ResetActivate)
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::System(SystemMsg::UpdateStatusMessage("test".to_string()));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
