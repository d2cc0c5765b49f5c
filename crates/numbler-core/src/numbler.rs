use std::path::Path;

use tracing::{info, warn};

use crate::code::Code;
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::session::{GameSession, SessionStatus};
use crate::storage::{LeaderboardStore, ScoreEntry};

/// Entry point for controllers: starts sessions and owns the leaderboard.
///
/// Sessions are plain values handed back to the caller; `Numbler` keeps no
/// reference to them.
#[derive(Debug)]
pub struct Numbler {
    store: LeaderboardStore,
}

impl Numbler {
    pub fn new(store: LeaderboardStore) -> Self {
        Self { store }
    }

    /// Open the leaderboard at `path`, treating a missing file as empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::new(LeaderboardStore::open(path))
    }

    pub fn start_session(&self, config: GameConfig) -> Result<GameSession> {
        let session = GameSession::new(config)?;
        info!("Started session ({})", config);
        Ok(session)
    }

    pub fn submit_guess(
        &self,
        session: &mut GameSession,
        guess: Code,
    ) -> Result<(Feedback, SessionStatus)> {
        session.submit_guess(guess)
    }

    /// Turn a won session into a leaderboard entry and record it.
    ///
    /// The session is consumed, so a win can only be recorded once. When only
    /// the file write fails the entry is still on the in-memory board and
    /// `StorageWriteFailure` is returned for the caller to report.
    pub fn finalize_win(&mut self, session: GameSession, player_name: &str) -> Result<ScoreEntry> {
        let score = session.score().ok_or(Error::SessionNotWon {
            status: session.status(),
        })?;

        let entry = ScoreEntry::new(
            player_name,
            score,
            session.digit_count(),
            session.attempts_used(),
        );
        info!("Recording {} points for {}", entry.score(), entry.player_name());

        if let Err(e) = self.store.record(entry.clone()) {
            warn!("Failed to save leaderboard: {}", e);
            return Err(e);
        }
        Ok(entry)
    }

    pub fn leaderboard(&self) -> &[ScoreEntry] {
        self.store.leaderboard().entries()
    }

    /// Whether a score would be kept on the board.
    pub fn qualifies(&self, score: u32) -> bool {
        self.store.leaderboard().qualifies(score)
    }
}
