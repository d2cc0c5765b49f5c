pub mod code;
pub mod config;
pub mod error;
pub mod feedback;
pub mod input;
pub mod numbler;
pub mod session;
pub mod storage;

pub use code::Code;
pub use config::{Difficulty, GameConfig};
pub use error::{Error, Result};
pub use feedback::{Feedback, Hint, Mark, evaluate, hint};
pub use input::{Entry, GuessBuffer, InputEvent, InputProvider, ScriptedInput, read_guess};
pub use numbler::Numbler;
pub use session::{Attempt, GameSession, SessionStatus, calculate_score};
pub use storage::{Leaderboard, LeaderboardStore, ScoreEntry};
