//! Countdown state machine.
//!
//! ```text
//! Idle    --start (total > 0)--> Running
//! Idle    --start (total = 0)--> Idle      label forced to "Start"
//! Running --pause-------------> Paused
//! Paused  --resume------------> Running
//! Running --expiry------------> Idle
//! any     --reset-------------> Idle
//! ```

use crate::{
    core::{
        cmd::{Cmd, TickerId},
        msg::{field::FieldMsg, timer::TimerMsg},
    },
    domain::{
        clock::{format_hms, total_seconds},
        elements::Elements,
        field::{field_value, pad_input, FieldRole},
        variant::{ControlLabel, TimerVariant},
    },
};

/// Period of the repeating ticker.
pub const TICK_PERIOD_MS: u64 = 1000;

/// Phase derived from [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// The three pieces of countdown state.
///
/// `active_ticker` is `Some` exactly when `running` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    running: bool,
    remaining_seconds: u64,
    active_ticker: Option<TickerId>,
    last_ticker_id: u64,
}

impl TimerState {
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn active_ticker(&self) -> Option<TickerId> {
        self.active_ticker
    }

    fn next_ticker_id(&mut self) -> TickerId {
        self.last_ticker_id += 1;
        TickerId(self.last_ticker_id)
    }
}

/// Owns the timer state and the elements it is wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerController {
    state: TimerState,
    elements: Elements,
    variant: TimerVariant,
}

impl TimerController {
    /// Wire a controller to an already validated set of elements.
    pub fn new(mut elements: Elements, variant: TimerVariant) -> Self {
        elements.clear_fields(variant);
        let mut controller = Self {
            state: TimerState::default(),
            elements,
            variant,
        };
        controller.refresh_display();
        controller.elements.control.set_label(ControlLabel::Start);
        controller
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn variant(&self) -> TimerVariant {
        self.variant
    }

    pub fn display_text(&self) -> &str {
        self.elements.display.text()
    }

    pub fn control_label(&self) -> &str {
        self.elements.control.label()
    }

    pub fn phase(&self) -> Phase {
        if self.state.running {
            Phase::Running
        } else if self.state.remaining_seconds > 0 {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    /// Timer-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: TimerMsg) -> Vec<Cmd> {
        let cmds = match msg {
            TimerMsg::ControlActivate => self.on_control_activate(),
            TimerMsg::ResetActivate => self.on_reset_activate(),
            TimerMsg::Tick(id) => self.tick(id),
        };
        debug_assert_eq!(self.state.running, self.state.active_ticker.is_some());
        cmds
    }

    /// Field-editing update function
    pub fn update_field(&mut self, msg: FieldMsg) -> Vec<Cmd> {
        match msg {
            FieldMsg::Input(role, c) => self.elements.field_mut(role).push(c),
            FieldMsg::Backspace(role) => self.elements.field_mut(role).pop(),
            FieldMsg::Set(role, value) => self.elements.field_mut(role).set_value(value),
            FieldMsg::Blur(role) => self.on_field_blur(role),
        }
        vec![]
    }

    fn on_control_activate(&mut self) -> Vec<Cmd> {
        if self.state.running {
            log::info!(
                "Paused with {} seconds remaining",
                self.state.remaining_seconds
            );
            let label = self.variant.paused_label();
            return self.stop(label);
        }

        if self.state.remaining_seconds == 0 {
            let total = self.read_fields();
            if total == 0 {
                log::debug!("Refusing to start a zero-length countdown");
                self.elements.control.set_label(ControlLabel::Start);
                return vec![];
            }
            log::info!("Starting countdown of {total} seconds");
            self.state.remaining_seconds = total;
        } else {
            log::info!(
                "Resuming with {} seconds remaining",
                self.state.remaining_seconds
            );
        }

        let id = self.state.next_ticker_id();
        self.state.running = true;
        self.state.active_ticker = Some(id);
        self.elements.control.set_label(ControlLabel::Pause);
        self.refresh_display();

        vec![Cmd::StartTicker {
            id,
            period_ms: TICK_PERIOD_MS,
        }]
    }

    fn on_reset_activate(&mut self) -> Vec<Cmd> {
        let cmds = self.stop(ControlLabel::Start);
        self.state.remaining_seconds = 0;
        self.refresh_display();
        self.elements.clear_fields(self.variant);
        log::info!("Timer reset");
        cmds
    }

    fn tick(&mut self, id: TickerId) -> Vec<Cmd> {
        if self.state.active_ticker != Some(id) {
            log::debug!("Ignoring tick from inactive {id}");
            return vec![];
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        self.refresh_display();

        if self.state.remaining_seconds > 0 {
            return vec![];
        }

        log::info!("Countdown finished");
        let cmds = self.stop(ControlLabel::Start);
        self.refresh_display();
        cmds
    }

    fn on_field_blur(&mut self, role: FieldRole) {
        if !self.variant.normalizes_on_blur() {
            return;
        }

        let field = self.elements.field_mut(role);
        let normalized = pad_input(field.value(), field.bounds);
        if normalized != field.value() {
            log::debug!("Normalized {role} field {:?} to {normalized:?}", field.value());
        }
        field.set_value(normalized);
    }

    /// Cancel the ticker, clear the handle and drop out of `running`.
    fn stop(&mut self, label: ControlLabel) -> Vec<Cmd> {
        let cmds = match self.state.active_ticker.take() {
            Some(id) => vec![Cmd::CancelTicker { id }],
            None => vec![],
        };
        self.state.running = false;
        self.elements.control.set_label(label);
        cmds
    }

    fn read_fields(&self) -> u64 {
        let value = |role| field_value(self.elements.field(role).value());
        total_seconds(
            value(FieldRole::Hours),
            value(FieldRole::Minutes),
            value(FieldRole::Seconds),
        )
    }

    fn refresh_display(&mut self) {
        self.elements
            .display
            .set_text(format_hms(self.state.remaining_seconds));
    }
}
