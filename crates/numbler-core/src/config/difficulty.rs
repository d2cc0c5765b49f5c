use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::config::GameConfig;

/// Preset difficulty levels offered by the main menu.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "easy")]
    Easy = 1,
    #[default]
    #[strum(serialize = "medium")]
    Medium = 2,
    #[strum(serialize = "hard")]
    Hard = 3,
    #[strum(serialize = "expert")]
    Expert = 4,
}

impl Difficulty {
    /// Map a menu key ('1'..='4') to a preset.
    pub fn from_menu_key(key: char) -> Option<Self> {
        key.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_repr)
    }

    pub fn menu_key(&self) -> char {
        char::from(b'0' + *self as u8)
    }

    pub fn config(&self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new(3, 6),
            Self::Medium => GameConfig::new(4, 6),
            Self::Hard => GameConfig::new(5, 6),
            Self::Expert => GameConfig::new(6, 8),
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
