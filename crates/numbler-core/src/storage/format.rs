use serde_json::{Value as JsonValue, json};
use tracing::warn;

use crate::storage::ScoreEntry;

/// Format one entry as a storage line: `name score digit_count attempts_used`.
pub fn format_entry_line(entry: &ScoreEntry) -> String {
    format!(
        "{} {} {} {}",
        entry.player_name(),
        entry.score(),
        entry.digit_count(),
        entry.attempts_used()
    )
}

/// Parse one storage line. Returns `None` for malformed lines.
pub fn parse_entry_line(line: &str) -> Option<ScoreEntry> {
    let mut parts = line.split_whitespace();
    let player_name = parts.next()?;
    let score = parts.next()?.parse().ok()?;
    let digit_count = parts.next()?.parse().ok()?;
    let attempts_used = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(ScoreEntry::new(player_name, score, digit_count, attempts_used))
}

/// Parse a whole leaderboard file, skipping blank and malformed lines.
pub fn parse_leaderboard(content: &str) -> Vec<ScoreEntry> {
    parse_lines(content.lines().enumerate())
}

/// Parse raw file bytes line by line.
///
/// A line that is not valid UTF-8 is skipped like any other malformed line
/// instead of failing the whole file.
pub fn parse_leaderboard_bytes(content: &[u8]) -> Vec<ScoreEntry> {
    let lines = content
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(index, raw)| match std::str::from_utf8(raw) {
            Ok(line) => Some((index, line)),
            Err(e) => {
                warn!("Skipping non-UTF-8 leaderboard line {}: {}", index + 1, e);
                None
            }
        });
    parse_lines(lines)
}

fn parse_lines<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> Vec<ScoreEntry> {
    lines
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let entry = parse_entry_line(line);
            if entry.is_none() {
                warn!("Skipping malformed leaderboard line {}: {:?}", index + 1, line);
            }
            entry
        })
        .collect()
}

/// Serialize entries into the storage format, one line each.
pub fn format_leaderboard<'a>(entries: impl IntoIterator<Item = &'a ScoreEntry>) -> String {
    entries
        .into_iter()
        .map(|e| format!("{}\n", format_entry_line(e)))
        .collect()
}

pub fn format_tsv_header() -> String {
    ["Rank", "Name", "Score", "Digits", "Attempts"].join("\t")
}

/// TSV export row; `rank` is 1-based.
pub fn format_tsv_row(rank: usize, entry: &ScoreEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        rank,
        entry.player_name(),
        entry.score(),
        entry.digit_count(),
        entry.attempts_used()
    )
}

/// JSON export of a ranked list.
pub fn format_json_leaderboard(entries: &[ScoreEntry]) -> JsonValue {
    let ranked: Vec<JsonValue> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            json!({
                "rank": i + 1,
                "name": e.player_name(),
                "score": e.score(),
                "digits": e.digit_count(),
                "attempts": e.attempts_used(),
            })
        })
        .collect();

    json!({ "entries": ranked })
}
