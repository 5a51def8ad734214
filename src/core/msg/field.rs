use serde::{Deserialize, Serialize};

use crate::domain::field::FieldRole;

/// Edits to the three numeric fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldMsg {
    Input(FieldRole, char),
    Backspace(FieldRole),
    Set(FieldRole, String),
    /// The field lost focus
    Blur(FieldRole),
}
