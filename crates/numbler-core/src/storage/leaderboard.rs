use serde::Serialize;

use crate::config::leaderboard::{CAPACITY, MAX_NAME_LEN};

/// Name used when a player leaves the name prompt empty.
pub const ANONYMOUS_NAME: &str = "anonymous";

/// One ranked result. Immutable once created.
///
/// Only built through [`ScoreEntry::new`], so the name is always a single
/// storable token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreEntry {
    player_name: String,
    score: u32,
    digit_count: usize,
    attempts_used: u32,
}

impl ScoreEntry {
    /// Build an entry, normalizing the name so it fits the storage format.
    pub fn new(player_name: &str, score: u32, digit_count: usize, attempts_used: u32) -> Self {
        Self {
            player_name: normalize_player_name(player_name),
            score,
            digit_count,
            attempts_used,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }
}

/// Trim, replace inner whitespace with `_`, and cut to 15 characters.
///
/// The leaderboard file is whitespace-separated, so names must be a single token.
pub fn normalize_player_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        return ANONYMOUS_NAME.to_string();
    }
    joined.chars().take(MAX_NAME_LEN).collect()
}

/// Score entries sorted by score descending, at most 10 long.
///
/// Ties keep insertion order: an entry recorded earlier stays above a later
/// one with the same score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from entries in their original order.
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Insert an entry and return its 0-based rank, or `None` if it was evicted.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        self.entries.push(entry);
        let inserted = self.entries.len() - 1;
        // Stable sort keeps the new entry behind existing equal scores,
        // so its rank is the number of entries scoring at least as much.
        let score = self.entries[inserted].score;
        let rank = self.entries[..inserted]
            .iter()
            .filter(|e| e.score >= score)
            .count();
        self.normalize();
        (rank < CAPACITY).then_some(rank)
    }

    /// Whether a score would make it onto the board.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < CAPACITY || self.entries.iter().any(|e| e.score < score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry::new(name, score, 4, 3)
    }

    #[test]
    fn test_name_truncated_to_15_chars() {
        let e = ScoreEntry::new("abcdefghijklmnopqrstuvwxyz", 100, 4, 3);
        assert_eq!(e.player_name(), "abcdefghijklmno");
        assert_eq!(e.player_name().chars().count(), 15);
    }

    #[test]
    fn test_name_truncation_counts_chars_not_bytes() {
        let e = ScoreEntry::new("ÄÖÜäöüßÄÖÜäöüßÄÖÜ", 100, 4, 3);
        assert_eq!(e.player_name().chars().count(), 15);
    }

    #[test]
    fn test_name_whitespace_normalized() {
        assert_eq!(normalize_player_name("  Ada  Lovelace "), "Ada_Lovelace");
        assert_eq!(normalize_player_name("   "), ANONYMOUS_NAME);
    }

    #[test]
    fn test_insert_sorts_descending() {
        let mut board = Leaderboard::new();
        board.insert(entry("a", 300));
        board.insert(entry("b", 900));
        board.insert(entry("c", 600));
        let scores: Vec<u32> = board.iter().map(|e| e.score()).collect();
        assert_eq!(scores, vec![900, 600, 300]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.insert(entry("first", 500));
        board.insert(entry("second", 500));
        assert_eq!(board.insert(entry("third", 500)), Some(2));
        let names: Vec<&str> = board.iter().map(|e| e.player_name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_insert_returns_rank() {
        let mut board = Leaderboard::new();
        assert_eq!(board.insert(entry("a", 300)), Some(0));
        assert_eq!(board.insert(entry("b", 900)), Some(0));
        assert_eq!(board.insert(entry("c", 600)), Some(1));
        assert_eq!(board.insert(entry("d", 100)), Some(3));
    }

    #[test]
    fn test_capacity_evicts_lowest() {
        let mut board = Leaderboard::new();
        for i in 1..=10 {
            board.insert(entry(&format!("p{}", i), i * 100));
        }
        assert!(!board.qualifies(100));
        assert!(board.qualifies(150));

        assert_eq!(board.insert(entry("late", 50)), None);
        assert_eq!(board.len(), 10);
        assert!(board.iter().all(|e| e.player_name() != "late"));

        assert_eq!(board.insert(entry("new", 550)), Some(5));
        assert_eq!(board.len(), 10);
        assert_eq!(board.entries().last().unwrap().score(), 200);
    }

    #[test]
    fn test_from_entries_normalizes() {
        let entries = (0..12).map(|i| entry(&format!("p{}", i), i * 10)).collect();
        let board = Leaderboard::from_entries(entries);
        assert_eq!(board.len(), 10);
        assert_eq!(board.entries()[0].score(), 110);
        assert_eq!(board.entries()[9].score(), 20);
    }
}
