//! Display settings and the config file
//!
//! Both the display settings and the gameplay tuning come from one optional
//! JSON file next to the executable's working directory. Missing fields fall
//! back to defaults; a broken file falls back entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::tuning::Tuning;

/// Default config file name
pub const CONFIG_FILE: &str = "goal-dash.json";

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: i32,
    pub window_height: i32,
    pub high_dpi: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// TTF font for overlay text (built-in font when unset)
    pub font_path: Option<String>,
    /// Overlay headline size
    pub font_size: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: SCENE_WIDTH as i32,
            window_height: SCENE_HEIGHT as i32,
            high_dpi: false,

            show_fps: false,
            font_path: None,
            font_size: 60,
        }
    }
}

/// Everything read from the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub tuning: Tuning,
}

impl Config {
    /// Parse and validate a config document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }

    /// Load the config from `path`, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {:#}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// No filesystem on the web
    #[cfg(target_arch = "wasm32")]
    pub fn load_from(_path: &Path) -> Self {
        log::info!("Using default config");
        Self::default()
    }

    /// Load the config from [`CONFIG_FILE`] in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }
}
