//! Integration layer
//!
//! Wires the pure update loop to the terminal and the ticker service:
//! - `Runtime` owns state, message queues and the command executor
//! - `AppRunner` drives it from terminal events and renders frames

pub mod app_runner;
pub mod runtime;
