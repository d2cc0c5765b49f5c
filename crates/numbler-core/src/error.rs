use thiserror::Error;

use crate::session::SessionStatus;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Guess must have exactly {expected} digits, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    #[error("Code length mismatch: secret has {expected} digits, guess has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Session is already finished ({status})")]
    SessionFinished { status: SessionStatus },

    #[error("Only a won session can be recorded (session is {status})")]
    SessionNotWon { status: SessionStatus },

    #[error("Leaderboard storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write leaderboard to {path}: {source}")]
    StorageWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error only affects the persisted ranking, not the game outcome.
    pub fn is_storage_warning(&self) -> bool {
        matches!(
            self,
            Error::StorageUnavailable(_) | Error::StorageWriteFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_warning_classification() {
        assert!(Error::StorageUnavailable("gone".into()).is_storage_warning());
        assert!(!Error::SessionNotWon {
            status: SessionStatus::Lost
        }
        .is_storage_warning());
        assert!(!Error::from(std::io::Error::other("disk")).is_storage_warning());
    }
}
