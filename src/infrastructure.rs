//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The ticker service driving the countdown

pub mod cli;
pub mod config;
pub mod ticker;
pub mod tui;
