//! Game configuration and policy constants.
//!
//! This module contains:
//! - `GameConfig` - digit count and attempt limit for one session
//! - `Difficulty` - the preset menu entries (Easy, Medium, Hard, Expert)
//! - Policy, scoring, and leaderboard constants

mod difficulty;
mod game_config;

pub use difficulty::*;
pub use game_config::*;

/// Product policy bounds for user-chosen configurations.
///
/// The core only needs `digit_count >= 1` and `max_attempts >= 1`; these
/// tighter ranges are what the menu offers.
pub mod policy {
    /// Smallest digit count offered to players.
    pub const MIN_DIGITS: usize = 3;

    /// Largest digit count offered to players.
    pub const MAX_DIGITS: usize = 6;

    /// Smallest attempt limit offered to players.
    pub const MIN_ATTEMPTS: u32 = 4;

    /// Largest attempt limit offered to players.
    pub const MAX_ATTEMPTS: u32 = 10;
}

/// Score computation constants.
pub mod scoring {
    /// Points awarded per digit for every attempt left (including the winning one).
    pub const POINTS_PER_DIGIT: u32 = 50;
}

/// Leaderboard storage configuration.
pub mod leaderboard {
    /// Maximum number of entries kept on the board.
    pub const CAPACITY: usize = 10;

    /// Player names are truncated to this many characters.
    pub const MAX_NAME_LEN: usize = 15;

    /// File name used when no explicit leaderboard path is configured.
    pub const DEFAULT_FILE_NAME: &str = "numbler_leaderboard.txt";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_constants() {
        assert!(policy::MIN_DIGITS <= policy::MAX_DIGITS);
        assert!(policy::MIN_ATTEMPTS <= policy::MAX_ATTEMPTS);
        assert_eq!(policy::MAX_DIGITS, 6);
        assert_eq!(policy::MAX_ATTEMPTS, 10);
    }

    #[test]
    fn test_leaderboard_constants() {
        assert_eq!(leaderboard::CAPACITY, 10);
        assert_eq!(leaderboard::MAX_NAME_LEN, 15);
    }
}
