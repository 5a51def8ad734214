use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::{
    core::{
        msg::{
            field::FieldMsg, system::SystemMsg, timer::TimerMsg, ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{ui::Focus, AppState},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Ticker events
        RawMsg::TimerTick(id) => vec![Msg::Timer(TimerMsg::Tick(id))],

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is orchestrated by the runner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Any key closes the help overlay
    if state.ui.show_help {
        return vec![Msg::Ui(UiMsg::ToggleHelp)];
    }

    if state.ui.is_editing() {
        if let Some(msgs) = translate_field_keys(key, state) {
            return msgs;
        }
    }

    translate_bound_keys(key, state)
}

/// Keys consumed by the focused field; `None` falls through to key bindings.
/// Space is never part of a number, so it stays bound to the timer.
fn translate_field_keys(key: KeyEvent, state: &AppState) -> Option<Vec<Msg>> {
    let role = state.ui.focus.field()?;
    match key.code {
        KeyCode::Char(c)
            if c != ' '
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(vec![Msg::Field(FieldMsg::Input(role, c))])
        }
        KeyCode::Backspace => Some(vec![Msg::Field(FieldMsg::Backspace(role))]),
        _ => None,
    }
}

/// Key bindings from configuration (flat mapping)
fn translate_bound_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let key = normalize_key(key);
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

/// Shifted characters and BackTab arrive with SHIFT on some terminals and
/// without it on others. Character bindings are written without SHIFT,
/// `<BackTab>` always carries it.
fn normalize_key(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
        KeyCode::BackTab => key.modifiers | KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    KeyEvent {
        code: key.code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::ToggleTimer => vec![Msg::Timer(TimerMsg::ControlActivate)],
        Action::Reset => vec![Msg::Timer(TimerMsg::ResetActivate)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Ui(UiMsg::FocusPrev)],
        Action::Help => vec![Msg::Ui(UiMsg::ToggleHelp)],
        Action::Activate => match state.ui.focus {
            Focus::Field(_) | Focus::Control => vec![Msg::Timer(TimerMsg::ControlActivate)],
            Focus::Reset => vec![Msg::Timer(TimerMsg::ResetActivate)],
        },
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::cmd::TickerId, domain::field::FieldRole, infrastructure::config::Config,
    };

    fn create_test_state() -> Result<AppState> {
        Ok(AppState::new_with_config(Config::embedded()?)?)
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_system_translation() -> Result<()> {
        let state = create_test_state()?;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
        Ok(())
    }

    #[test]
    fn test_tick_translation() -> Result<()> {
        let state = create_test_state()?;
        assert_eq!(
            translate_raw_to_domain(RawMsg::TimerTick(TickerId(5)), &state),
            vec![Msg::Timer(TimerMsg::Tick(TickerId(5)))]
        );
        Ok(())
    }

    #[test]
    fn test_ctrl_c_always_quits() -> Result<()> {
        let state = create_test_state()?;
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        Ok(())
    }

    #[test]
    fn test_printable_keys_go_to_focused_field() -> Result<()> {
        let state = create_test_state()?;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::Field(FieldMsg::Input(FieldRole::Hours, 'q'))]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Backspace), &state),
            vec![Msg::Field(FieldMsg::Backspace(FieldRole::Hours))]
        );
        Ok(())
    }

    #[test]
    fn test_bindings_apply_on_buttons() -> Result<()> {
        let mut state = create_test_state()?;
        state.ui.focus = Focus::Control;

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char(' ')), &state),
            vec![Msg::Timer(TimerMsg::ControlActivate)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('r')), &state),
            vec![Msg::Timer(TimerMsg::ResetActivate)]
        );
        Ok(())
    }

    #[test]
    fn test_enter_activates_focused_element() -> Result<()> {
        let mut state = create_test_state()?;

        // Enter inside a field submits
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Timer(TimerMsg::ControlActivate)]
        );

        state.ui.focus = Focus::Reset;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Timer(TimerMsg::ResetActivate)]
        );
        Ok(())
    }

    #[test]
    fn test_tab_moves_focus_even_while_editing() -> Result<()> {
        let state = create_test_state()?;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Ui(UiMsg::FocusNext)]
        );
        let back_tab = RawMsg::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(
            translate_raw_to_domain(back_tab, &state),
            vec![Msg::Ui(UiMsg::FocusPrev)]
        );
        Ok(())
    }

    #[test]
    fn test_back_tab_without_shift_moves_focus_back() -> Result<()> {
        let state = create_test_state()?;
        let back_tab = RawMsg::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        assert_eq!(
            translate_raw_to_domain(back_tab, &state),
            vec![Msg::Ui(UiMsg::FocusPrev)]
        );
        Ok(())
    }

    #[test]
    fn test_space_toggles_timer_inside_fields() -> Result<()> {
        let state = create_test_state()?;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char(' ')), &state),
            vec![Msg::Timer(TimerMsg::ControlActivate)]
        );
        Ok(())
    }

    #[test]
    fn test_shifted_help_key() -> Result<()> {
        let mut state = create_test_state()?;
        state.ui.focus = Focus::Control;
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::Ui(UiMsg::ToggleHelp)]
        );
        Ok(())
    }

    #[test]
    fn test_any_key_closes_help() -> Result<()> {
        let mut state = create_test_state()?;
        state.ui.show_help = true;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('x')), &state),
            vec![Msg::Ui(UiMsg::ToggleHelp)]
        );
        Ok(())
    }

    #[test]
    fn test_key_release_is_ignored() -> Result<()> {
        let mut state = create_test_state()?;
        state.ui.focus = Focus::Control;
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(translate_raw_to_domain(RawMsg::Key(release), &state).is_empty());
        Ok(())
    }
}
