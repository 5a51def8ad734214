use color_eyre::eyre::Result;

pub mod system;
pub mod timer;
pub mod ui;

use crate::{domain::elements::Elements, infrastructure::config::Config};
use system::SystemState;
use timer::TimerController;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub timer: TimerController,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Build the initial state from configuration.
    ///
    /// Fails when the configured element layout lacks any required element;
    /// no state (and therefore no key handling) exists in that case.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let elements = Elements::resolve(&config.elements)?;
        let timer = TimerController::new(elements, config.timer.variant);

        Ok(Self {
            timer,
            ui: UiState::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::timer::Phase;
    use crate::domain::variant::TimerVariant;

    #[test]
    fn test_new_with_embedded_config() -> Result<()> {
        let state = AppState::new_with_config(Config::embedded()?)?;
        assert_eq!(state.timer.phase(), Phase::Idle);
        assert_eq!(state.timer.variant(), TimerVariant::Padded);
        assert!(!state.system.should_quit);
        Ok(())
    }

    #[test]
    fn test_new_with_empty_layout_fails() {
        let result = AppState::new_with_config(Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_variant_comes_from_config() -> Result<()> {
        let mut config = Config::embedded()?;
        config.timer.variant = TimerVariant::Classic;

        let state = AppState::new_with_config(config)?;
        assert_eq!(state.timer.variant(), TimerVariant::Classic);
        assert_eq!(state.timer.elements().minutes.value(), "0");
        Ok(())
    }
}
