use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::storage::{Leaderboard, ScoreEntry, format_leaderboard, parse_leaderboard_bytes};

/// File-backed leaderboard.
///
/// The in-memory board is the source of truth after `load`; every `record`
/// rewrites the whole file.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
    board: Leaderboard,
}

impl LeaderboardStore {
    /// Create a store with an empty board. Nothing is read until `load`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            board: Leaderboard::new(),
        }
    }

    /// Create a store and load whatever is on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Read the board from disk.
    ///
    /// A missing or unreadable file yields an empty board.
    pub fn load(&mut self) -> &Leaderboard {
        self.board = match read_leaderboard(&self.path) {
            Ok(board) => {
                info!("Loaded {} leaderboard entries from {:?}", board.len(), self.path);
                board
            }
            Err(e) => {
                warn!("{}, starting with an empty leaderboard", e);
                Leaderboard::new()
            }
        };
        &self.board
    }

    /// Insert an entry, keep the top 10, and persist.
    ///
    /// The in-memory board is updated even when the write fails; the caller
    /// gets `StorageWriteFailure` to report.
    pub fn record(&mut self, entry: ScoreEntry) -> Result<&Leaderboard> {
        match self.board.insert(entry) {
            Some(rank) => debug!("Recorded entry at rank {}", rank + 1),
            None => debug!("Entry did not make the leaderboard"),
        }
        self.persist()?;
        Ok(&self.board)
    }

    /// Overwrite the file with the current board.
    pub fn persist(&self) -> Result<()> {
        write_leaderboard(&self.path, &self.board)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse a leaderboard file, reporting why it could not be read.
///
/// Undecodable or malformed lines are dropped; the rest of the file is kept.
pub fn read_leaderboard<P: AsRef<Path>>(path: P) -> Result<Leaderboard> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|e| {
        let reason = if e.kind() == ErrorKind::NotFound {
            format!("{:?} does not exist", path)
        } else {
            format!("{:?}: {}", path, e)
        };
        Error::StorageUnavailable(reason)
    })?;

    Ok(Leaderboard::from_entries(parse_leaderboard_bytes(&content)))
}

/// Write a leaderboard file, creating parent directories as needed.
pub fn write_leaderboard<P: AsRef<Path>>(path: P, board: &Leaderboard) -> Result<()> {
    let path = path.as_ref();
    let to_failure = |source| Error::StorageWriteFailure {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_failure)?;
    }
    fs::write(path, format_leaderboard(board.iter())).map_err(to_failure)?;
    Ok(())
}
