use serde::{Deserialize, Serialize};

use crate::core::state::ui::Focus;

/// Messages specific to UiState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
    FocusPrev,
    Focus(Focus),
    ToggleHelp,
}
