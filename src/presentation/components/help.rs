//! Help overlay component

use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    presentation::{config::keybindings::Action, widgets::HelpWidget},
};

#[derive(Debug, Clone, Default)]
pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = HelpWidget::new(
            entries(state),
            state.config.config.styles.get_or_default("help"),
        );
        frame.render_widget(widget, area);
    }
}

/// One row per bound action, in declaration order
pub fn entries(state: &AppState) -> Vec<(String, String)> {
    let keybindings = &state.config.config.keybindings;
    Action::iter()
        .filter_map(|action| {
            let keys = keybindings.keys_for(action);
            (!keys.is_empty()).then(|| (keys.join(" "), action.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn test_entries_from_default_bindings() -> Result<()> {
        let state = AppState::new_with_config(Config::embedded()?)?;
        let entries = entries(&state);

        assert_eq!(entries.len(), 7);
        assert_eq!(
            entries[0],
            ("<Ctrl-c> <q>".to_owned(), "Quit".to_owned())
        );
        assert_eq!(entries[1], ("<Space>".to_owned(), "ToggleTimer".to_owned()));
        Ok(())
    }
}
