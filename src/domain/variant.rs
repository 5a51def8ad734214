use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Text shown on the control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ControlLabel {
    Start,
    Pause,
    Resume,
}

/// Labelling and field policy of the timer.
///
/// - `Classic`: the control reads "Start" after a pause, fields reset to "0"
///   and are left as typed.
/// - `Padded`: the control reads "Resume" after a pause, fields reset to "00"
///   and are normalised with [`pad_input`](crate::domain::field::pad_input)
///   when they lose focus.
///
/// Expiry and reset always bring the label back to "Start".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TimerVariant {
    Classic,
    #[default]
    Padded,
}

impl TimerVariant {
    pub fn paused_label(self) -> ControlLabel {
        match self {
            TimerVariant::Classic => ControlLabel::Start,
            TimerVariant::Padded => ControlLabel::Resume,
        }
    }

    /// What a field holds after a reset.
    pub fn zero_field(self) -> &'static str {
        match self {
            TimerVariant::Classic => "0",
            TimerVariant::Padded => "00",
        }
    }

    pub fn normalizes_on_blur(self) -> bool {
        matches!(self, TimerVariant::Padded)
    }
}
