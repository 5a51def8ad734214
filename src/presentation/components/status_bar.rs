//! Status bar component
//!
//! Shows the timer phase and variant, the latest status message and a help hint.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{config::keybindings::Action, widgets::StatusBarWidget},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let hint = help_hint(state);
        let widget = StatusBarWidget::new(
            format!("{} | {}", state.timer.phase(), state.timer.variant()),
            state.system.status_message().map(String::as_str),
            &hint,
            state.config.config.styles.get_or_default("status"),
        );
        frame.render_widget(widget, area);
    }
}

/// `<?> help`, or nothing when help is unbound
pub fn help_hint(state: &AppState) -> String {
    state
        .config
        .config
        .keybindings
        .keys_for(Action::Help)
        .first()
        .map(|key| format!("{key} help"))
        .unwrap_or_default()
}
