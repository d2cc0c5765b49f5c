//! Export command for the leaderboard.

use std::path::Path;

use anyhow::Result;
use numbler_core::ScoreEntry;
use numbler_core::storage::{format_json_leaderboard, format_tsv_header, format_tsv_row};

use crate::cli::ExportFormat;

/// Export the leaderboard to a file or stdout.
pub fn run(entries: &[ScoreEntry], output: Option<&Path>, format: ExportFormat) -> Result<()> {
    let content = generate(entries, format)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Exported {} entries to: {}", entries.len(), output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

pub fn generate(entries: &[ScoreEntry], format: ExportFormat) -> Result<String> {
    let content = match format {
        ExportFormat::Tsv => std::iter::once(format_tsv_header())
            .chain(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| format_tsv_row(i + 1, e)),
            )
            .collect::<Vec<_>>()
            .join("\n"),
        ExportFormat::Json => serde_json::to_string_pretty(&format_json_leaderboard(entries))?,
    };
    Ok(content)
}
