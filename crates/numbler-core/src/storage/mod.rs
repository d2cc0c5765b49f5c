mod format;
mod leaderboard;
mod store;

pub use format::*;
pub use leaderboard::*;
pub use store::*;
