//! Leaderboard listing command.

use anyhow::Result;
use numbler_core::Numbler;
use numbler_core::storage::format_json_leaderboard;

use crate::render;

/// Print the leaderboard as a table or JSON.
pub fn run(numbler: &Numbler, json: bool) -> Result<()> {
    let entries = numbler.leaderboard();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&format_json_leaderboard(entries))?
        );
    } else {
        print!("{}", render::render_leaderboard(entries));
    }
    Ok(())
}
