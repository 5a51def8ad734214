//! # countdown - a terminal countdown timer
//!
//! Three numeric inputs (hours, minutes, seconds), a start/pause/resume
//! button, a reset button and an `HH:MM:SS` readout, built with Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, owned by the runtime
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (ticker start/cancel, terminal resize)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use countdown::{
//!     core::msg::{field::FieldMsg, timer::TimerMsg},
//!     domain::field::FieldRole,
//!     infrastructure::config::Config,
//!     AppState, Cmd, Msg, update,
//! };
//!
//! let config = Config::embedded().unwrap();
//! let state = AppState::new_with_config(config).unwrap();
//!
//! let (state, _) = update(
//!     Msg::Field(FieldMsg::Set(FieldRole::Seconds, "5".to_string())),
//!     state,
//! );
//! let (state, commands) = update(Msg::Timer(TimerMsg::ControlActivate), state);
//!
//! assert_eq!(state.timer.display_text(), "00:00:05");
//! assert!(matches!(commands[0], Cmd::StartTicker { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and commands
//! - [`domain`] - Time arithmetic, field parsing and element definitions
//! - [`infrastructure`] - Terminal, ticker service, configuration and CLI
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - Components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
