use crate::core::{
    cmd::Cmd,
    msg::{field::FieldMsg, system::SystemMsg, timer::TimerMsg, Msg},
    state::{timer::Phase, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Timer messages (delegated to TimerController)
        Msg::Timer(timer_msg) => {
            let before = state.timer.phase();
            let mut commands = state.timer.update(timer_msg.clone());
            if let Some(system_msg) = timer_status(&timer_msg, before, state.timer.phase()) {
                commands.extend(state.system.update(system_msg));
            }
            (state, commands)
        }

        // Field edits (delegated to TimerController)
        Msg::Field(field_msg) => {
            let commands = state.timer.update_field(field_msg);
            (state, commands)
        }

        // UI messages; a field that loses focus is blurred
        Msg::Ui(ui_msg) => {
            let previous = state.ui.focus;
            let mut commands = state.ui.update(ui_msg);
            if let Some(role) = previous.field() {
                if state.ui.focus != previous {
                    commands.extend(state.timer.update_field(FieldMsg::Blur(role)));
                }
            }
            (state, commands)
        }
    }
}

/// Status bar feedback for a timer transition
fn timer_status(msg: &TimerMsg, before: Phase, after: Phase) -> Option<SystemMsg> {
    let message = match (msg, before, after) {
        (TimerMsg::Tick(_), Phase::Running, Phase::Idle) => "Time's up",
        (TimerMsg::ControlActivate, Phase::Idle, Phase::Idle) => "Enter a duration to start",
        (TimerMsg::ResetActivate, Phase::Running | Phase::Paused, Phase::Idle) => "Timer reset",
        (TimerMsg::ControlActivate, _, Phase::Running) => {
            return Some(SystemMsg::ClearStatusMessage)
        }
        _ => return None,
    };
    Some(SystemMsg::UpdateStatusMessage(message.to_owned()))
}
