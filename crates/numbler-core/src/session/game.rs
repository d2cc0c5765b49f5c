use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::code::Code;
use crate::config::{GameConfig, scoring};
use crate::error::{Error, Result};
use crate::feedback::{Feedback, Hint, evaluate, hint};
use crate::session::SessionStatus;

/// One submitted guess with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: Code,
    pub feedback: Feedback,
    /// Higher/lower hint; `None` for the winning guess.
    pub hint: Option<Hint>,
}

/// A single game: secret code, attempt history, and win/loss status.
///
/// Only `submit_guess` and `reset` mutate the session. Once the status is
/// terminal every further guess is rejected with `Error::SessionFinished`.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    secret: Code,
    attempts: Vec<Attempt>,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session with a secret drawn from the thread RNG.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let secret = Code::random(config.digit_count, rng);
        Ok(Self::from_parts(config, secret))
    }

    /// Start a session with a known secret.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self> {
        config.validate()?;
        if secret.len() != config.digit_count {
            return Err(Error::InvalidConfiguration(format!(
                "secret has {} digits but the session expects {}",
                secret.len(),
                config.digit_count
            )));
        }
        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: GameConfig, secret: Code) -> Self {
        debug!("New session: {}", config);
        Self {
            config,
            secret,
            attempts: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Evaluate a guess and advance the state machine.
    pub fn submit_guess(&mut self, guess: Code) -> Result<(Feedback, SessionStatus)> {
        if self.status.is_terminal() {
            return Err(Error::SessionFinished {
                status: self.status,
            });
        }
        if guess.len() != self.config.digit_count {
            return Err(Error::InvalidGuessLength {
                expected: self.config.digit_count,
                actual: guess.len(),
            });
        }

        let feedback = evaluate(&self.secret, &guess)?;
        let hint = hint(&self.secret, &guess);
        let solved = feedback.is_solved();

        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
            hint,
        });

        if solved {
            self.status = SessionStatus::Won;
            info!("Code cracked in {} attempt(s)", self.attempts_used());
        } else if self.attempts_used() >= self.config.max_attempts {
            self.status = SessionStatus::Lost;
            info!("Out of attempts, secret was {}", self.secret);
        } else {
            debug!(
                "Attempt {}/{}: {}",
                self.attempts_used(),
                self.config.max_attempts,
                feedback
            );
        }

        Ok((feedback, self.status))
    }

    /// Discard the current game and start over with a fresh secret.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        self.reset_with_rng(config, &mut rand::thread_rng())
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, config: GameConfig, rng: &mut R) -> Result<()> {
        *self = Self::with_rng(config, rng)?;
        Ok(())
    }

    /// Score for a won game, `None` otherwise.
    pub fn score(&self) -> Option<u32> {
        (self.status == SessionStatus::Won)
            .then(|| calculate_score(&self.config, self.attempts_used()))
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn digit_count(&self) -> usize {
        self.config.digit_count
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts.len() as u32
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts_used())
    }

    /// The secret code. Controllers should only reveal it once the game is over.
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}

/// `(max_attempts - attempts_used + 1) * digit_count * 50`, saturating at `u32::MAX`.
pub fn calculate_score(config: &GameConfig, attempts_used: u32) -> u32 {
    let left = config
        .max_attempts
        .saturating_sub(attempts_used)
        .saturating_add(1);
    let digits = u32::try_from(config.digit_count).unwrap_or(u32::MAX);
    left.saturating_mul(digits).saturating_mul(scoring::POINTS_PER_DIGIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn session(secret: &str, max_attempts: u32) -> GameSession {
        GameSession::with_secret(GameConfig::new(secret.len(), max_attempts), code(secret)).unwrap()
    }

    #[test]
    fn test_new_session_in_progress() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = GameSession::with_rng(GameConfig::new(5, 6), &mut rng).unwrap();
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.secret().len(), 5);
        assert!(s.attempts().is_empty());
        assert_eq!(s.remaining_attempts(), 6);
    }

    #[test]
    fn test_win_on_correct_guess() {
        let mut s = session("4821", 6);
        let (fb, status) = s.submit_guess(code("1234")).unwrap();
        assert_eq!(status, SessionStatus::InProgress);
        assert!(!fb.is_solved());

        let (fb, status) = s.submit_guess(code("4821")).unwrap();
        assert!(fb.is_solved());
        assert_eq!(status, SessionStatus::Won);
        assert_eq!(s.attempts_used(), 2);
        assert_eq!(s.attempts()[1].hint, None);
    }

    #[test]
    fn test_lost_after_max_attempts() {
        let mut s = session("999", 4);
        for i in 0..4 {
            let (_, status) = s.submit_guess(code("123")).unwrap();
            if i < 3 {
                assert_eq!(status, SessionStatus::InProgress);
            } else {
                assert_eq!(status, SessionStatus::Lost);
            }
        }
        assert_eq!(s.remaining_attempts(), 0);
        assert_eq!(s.score(), None);
    }

    #[test]
    fn test_win_on_last_attempt_is_won() {
        let mut s = session("12", 2);
        s.submit_guess(code("21")).unwrap();
        let (_, status) = s.submit_guess(code("12")).unwrap();
        assert_eq!(status, SessionStatus::Won);
        assert_eq!(s.score(), Some(2 * 50));
    }

    #[test]
    fn test_submit_after_win_is_rejected() {
        let mut s = session("123", 5);
        s.submit_guess(code("123")).unwrap();
        let err = s.submit_guess(code("123")).unwrap_err();
        assert!(matches!(
            err,
            Error::SessionFinished {
                status: SessionStatus::Won
            }
        ));
        assert_eq!(s.attempts_used(), 1);
    }

    #[test]
    fn test_submit_after_loss_is_rejected() {
        let mut s = session("1", 1);
        s.submit_guess(code("2")).unwrap();
        assert!(matches!(
            s.submit_guess(code("1")),
            Err(Error::SessionFinished {
                status: SessionStatus::Lost
            })
        ));
    }

    #[test]
    fn test_wrong_length_does_not_change_state() {
        let mut s = session("1234", 6);
        let err = s.submit_guess(code("123")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGuessLength {
                expected: 4,
                actual: 3
            }
        ));
        assert!(s.attempts().is_empty());
        assert_eq!(s.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_hints_recorded() {
        let mut s = session("500", 6);
        s.submit_guess(code("123")).unwrap();
        s.submit_guess(code("900")).unwrap();
        assert_eq!(s.attempts()[0].hint, Some(Hint::Higher));
        assert_eq!(s.attempts()[1].hint, Some(Hint::Lower));
    }

    #[test]
    fn test_reset_from_terminal_state() {
        let mut s = session("12", 1);
        s.submit_guess(code("99")).unwrap();
        assert_eq!(s.status(), SessionStatus::Lost);

        let mut rng = StdRng::seed_from_u64(3);
        s.reset_with_rng(GameConfig::new(6, 8), &mut rng).unwrap();
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert!(s.attempts().is_empty());
        assert_eq!(s.digit_count(), 6);
        assert_eq!(s.max_attempts(), 8);
        assert_eq!(s.secret().len(), 6);
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(calculate_score(&GameConfig::new(4, 6), 3), 800);
        assert_eq!(calculate_score(&GameConfig::new(3, 6), 1), 900);
        assert_eq!(calculate_score(&GameConfig::new(6, 8), 8), 300);
    }

    #[test]
    fn test_score_saturates_on_huge_config() {
        assert_eq!(calculate_score(&GameConfig::new(1, u32::MAX), 1), u32::MAX);
        assert_eq!(calculate_score(&GameConfig::new(usize::MAX, 4), 1), u32::MAX);

        let mut s = GameSession::with_secret(GameConfig::new(1, u32::MAX), code("7")).unwrap();
        s.submit_guess(code("7")).unwrap();
        assert_eq!(s.score(), Some(u32::MAX));
    }

    #[test]
    fn test_score_only_when_won() {
        let mut s = session("4444", 6);
        assert_eq!(s.score(), None);
        s.submit_guess(code("1111")).unwrap();
        s.submit_guess(code("2222")).unwrap();
        s.submit_guess(code("4444")).unwrap();
        assert_eq!(s.score(), Some(800));
    }

    #[test]
    fn test_with_secret_length_must_match() {
        let err = GameSession::with_secret(GameConfig::new(4, 6), code("123")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_config_rejected() {
        assert!(GameSession::new(GameConfig::new(0, 6)).is_err());
        assert!(GameSession::new(GameConfig::new(4, 0)).is_err());
    }
}
