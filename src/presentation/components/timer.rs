//! The timer screen: three inputs, two buttons and the readout

use ratatui::prelude::*;

use crate::{
    core::state::{timer::Phase, ui::Focus, AppState},
    domain::field::FieldRole,
    presentation::widgets::{ButtonWidget, FieldWidget, TimeDisplayWidget},
};

#[derive(Debug, Clone, Default)]
pub struct TimerComponent;

impl TimerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [inputs, buttons, display] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        let field_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inputs);
        for (role, field_area) in [FieldRole::Hours, FieldRole::Minutes, FieldRole::Seconds]
            .into_iter()
            .zip(field_areas.iter())
        {
            self.render_field(state, frame, *field_area, role);
        }

        let [control_area, reset_area] =
            Layout::horizontal([Constraint::Ratio(1, 2); 2]).areas(buttons);
        let elements = state.timer.elements();
        frame.render_widget(
            ButtonWidget::new(
                elements.control.label(),
                button_style(state, Focus::Control),
            ),
            control_area,
        );
        frame.render_widget(
            ButtonWidget::new(elements.reset.label(), button_style(state, Focus::Reset)),
            reset_area,
        );

        frame.render_widget(
            TimeDisplayWidget::new(
                &elements.display.title,
                state.timer.display_text(),
                display_style(state),
            ),
            display,
        );
    }

    fn render_field(&self, state: &AppState, frame: &mut Frame, area: Rect, role: FieldRole) {
        let field = state.timer.elements().field(role);
        let focused = state.ui.focus == Focus::Field(role);
        let style_key = if focused { "field_focused" } else { "field" };
        let widget = FieldWidget::new(&field.title, field.value())
            .style(state.config.config.styles.get_or_default(style_key))
            .focused(focused);
        frame.render_widget(widget, area);
    }
}

fn button_style(state: &AppState, focus: Focus) -> Style {
    let key = if state.ui.focus == focus {
        "button_focused"
    } else {
        "button"
    };
    state.config.config.styles.get_or_default(key)
}

fn display_style(state: &AppState) -> Style {
    let key = match state.timer.phase() {
        Phase::Running => "display_running",
        Phase::Paused => "display_paused",
        Phase::Idle => "display",
    };
    state.config.config.styles.get_or_default(key)
}
