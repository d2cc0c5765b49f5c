use serde::{Deserialize, Serialize};

use crate::config::policy;
use crate::error::{Error, Result};

/// Digit count and attempt limit for a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub digit_count: usize,
    pub max_attempts: u32,
}

impl GameConfig {
    pub fn new(digit_count: usize, max_attempts: u32) -> Self {
        Self {
            digit_count,
            max_attempts,
        }
    }

    /// Check the minimum the game engine needs to run at all.
    pub fn validate(&self) -> Result<()> {
        if self.digit_count == 0 {
            return Err(Error::InvalidConfiguration(
                "digit count must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfiguration(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the ranges offered by the menu (3-6 digits, 4-10 attempts).
    pub fn validate_policy(&self) -> Result<()> {
        if !(policy::MIN_DIGITS..=policy::MAX_DIGITS).contains(&self.digit_count) {
            return Err(Error::InvalidConfiguration(format!(
                "digit count must be between {} and {}, got {}",
                policy::MIN_DIGITS,
                policy::MAX_DIGITS,
                self.digit_count
            )));
        }
        if !(policy::MIN_ATTEMPTS..=policy::MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(Error::InvalidConfiguration(format!(
                "max attempts must be between {} and {}, got {}",
                policy::MIN_ATTEMPTS,
                policy::MAX_ATTEMPTS,
                self.max_attempts
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 6)
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} digits, {} attempts",
            self.digit_count, self.max_attempts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        let config = GameConfig::default();
        assert_eq!(config.digit_count, 4);
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(GameConfig::new(0, 6).validate().is_err());
        assert!(GameConfig::new(4, 0).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_policy_bounds() {
        assert!(GameConfig::new(3, 4).validate_policy().is_ok());
        assert!(GameConfig::new(6, 10).validate_policy().is_ok());
        assert!(matches!(
            GameConfig::new(2, 6).validate_policy(),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 6).validate_policy(),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(4, 3).validate_policy(),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(4, 11).validate_policy(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameConfig::new(5, 6).to_string(), "5 digits, 6 attempts");
    }
}
