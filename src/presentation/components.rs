//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod help;
pub mod status_bar;
pub mod timer;

pub use help::HelpComponent;
pub use status_bar::StatusBarComponent;
pub use timer::TimerComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub timer: TimerComponent,
    pub status_bar: StatusBarComponent,
    pub help: HelpComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // [timer, status bar]
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        self.timer.view(state, frame, main);
        self.status_bar.view(state, frame, status);

        // Overlay goes last
        if state.ui.show_help {
            self.help.view(state, frame, area);
        }
    }
}
