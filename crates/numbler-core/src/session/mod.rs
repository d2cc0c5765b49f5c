//! Game session state machine.
//!
//! - `SessionStatus` - InProgress, Won, Lost
//! - `Attempt` - one submitted guess and its feedback
//! - `GameSession` - secret, history, and status for one game

mod game;
mod state;

pub use game::*;
pub use state::*;
