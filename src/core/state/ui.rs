use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::field::FieldRole,
};

/// Which element receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    Field(FieldRole),
    Control,
    Reset,
}

impl Focus {
    /// Tab order
    pub const ORDER: [Focus; 5] = [
        Focus::Field(FieldRole::Hours),
        Focus::Field(FieldRole::Minutes),
        Focus::Field(FieldRole::Seconds),
        Focus::Control,
        Focus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(self) -> Option<FieldRole> {
        match self {
            Focus::Field(role) => Some(role),
            Focus::Control | Focus::Reset => None,
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldRole::Hours)
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub show_help: bool,
}

impl UiState {
    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusNext => self.focus = self.focus.next(),
            UiMsg::FocusPrev => self.focus = self.focus.prev(),
            UiMsg::Focus(focus) => self.focus = focus,
            UiMsg::ToggleHelp => self.show_help = !self.show_help,
        }
        vec![]
    }

    /// Whether printable keys go to a field rather than to key bindings
    pub fn is_editing(&self) -> bool {
        self.focus.field().is_some() && !self.show_help
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_focus_cycles_forward() {
        let mut ui = UiState::default();
        let mut visited = vec![ui.focus];
        for _ in 0..5 {
            ui.update(UiMsg::FocusNext);
            visited.push(ui.focus);
        }

        assert_eq!(
            visited,
            vec![
                Focus::Field(FieldRole::Hours),
                Focus::Field(FieldRole::Minutes),
                Focus::Field(FieldRole::Seconds),
                Focus::Control,
                Focus::Reset,
                Focus::Field(FieldRole::Hours),
            ]
        );
    }

    #[test]
    fn test_focus_cycles_backward() {
        let mut ui = UiState::default();
        ui.update(UiMsg::FocusPrev);
        assert_eq!(ui.focus, Focus::Reset);
        ui.update(UiMsg::FocusPrev);
        assert_eq!(ui.focus, Focus::Control);
    }

    #[test]
    fn test_is_editing() {
        let mut ui = UiState::default();
        assert!(ui.is_editing());

        ui.update(UiMsg::Focus(Focus::Control));
        assert!(!ui.is_editing());

        ui.update(UiMsg::Focus(Focus::Field(FieldRole::Seconds)));
        ui.update(UiMsg::ToggleHelp);
        assert!(!ui.is_editing());
    }
}
