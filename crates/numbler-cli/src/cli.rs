//! CLI argument definitions for numbler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use numbler_core::Difficulty;

#[derive(Parser)]
#[command(name = "numbler")]
#[command(about = "Crack the secret number code", version)]
pub struct Args {
    /// Leaderboard file (overrides the config file)
    #[arg(long, value_name = "FILE", env = "NUMBLER_LEADERBOARD")]
    pub leaderboard: Option<PathBuf>,

    /// Config file (defaults to <config dir>/numbler/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play right away, skipping the main menu
    Play {
        /// Preset difficulty (easy, medium, hard, expert)
        #[arg(short, long, conflicts_with_all = ["digits", "attempts"])]
        difficulty: Option<Difficulty>,
        /// Custom digit count (3-6)
        #[arg(long, requires = "attempts")]
        digits: Option<usize>,
        /// Custom attempt limit (4-10)
        #[arg(long, requires = "digits")]
        attempts: Option<u32>,
    },
    /// Print the leaderboard
    Leaderboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the leaderboard
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}
