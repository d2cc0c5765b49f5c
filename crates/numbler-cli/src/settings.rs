//! User settings loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use numbler_core::Difficulty;
use numbler_core::config::leaderboard::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const APP_DIR: &str = "numbler";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the leaderboard is stored; platform data dir when unset.
    pub leaderboard_path: Option<PathBuf>,
    /// Preset used when the menu selection is not recognised.
    pub default_difficulty: Difficulty,
    /// Show higher/lower arrows next to wrong guesses.
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard_path: None,
            default_difficulty: Difficulty::default(),
            show_hints: true,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let settings =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    /// Load from `explicit` or the default location, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let path = match explicit.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => path,
            None => return Self::default(),
        };

        if explicit.is_none() && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to load settings: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Leaderboard path: CLI flag, then config file, then platform data dir.
    pub fn leaderboard_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.leaderboard_path.clone())
            .unwrap_or_else(default_leaderboard_path)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

pub fn default_leaderboard_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DEFAULT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}
