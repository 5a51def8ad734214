use std::path::Path;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{elements::ElementLayout, variant::TimerVariant},
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub timer: TimerConfig,
    /// Mounted elements; a user table replaces the default one as a whole
    #[serde(default)]
    pub elements: ElementLayout,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TimerConfig {
    #[serde(default)]
    pub variant: TimerVariant,
}

impl Config {
    /// The defaults compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load user configuration from the config directory over the embedded defaults
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = utils::get_config_dir();
        Self::load_from(&config_dir)
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}; using defaults",
                config_dir.display()
            );
            return Ok(default_config);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.elements.is_empty() {
            cfg.elements = default_config.elements;
        }

        Ok(cfg)
    }

    /// Apply command line overrides
    pub fn with_variant(mut self, variant: Option<TimerVariant>) -> Self {
        if let Some(variant) = variant {
            self.timer.variant = variant;
        }
        self
    }
}
