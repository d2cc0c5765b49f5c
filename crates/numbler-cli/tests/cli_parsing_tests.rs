//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without starting an interactive game.

use clap::Parser;

// The binary does not export its argument types, so pull the module in directly.
#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{Args, Command, ExportFormat};
use numbler_core::Difficulty;

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["numbler"]).unwrap();
    assert!(args.command.is_none());
    assert!(args.config.is_none());
}

#[test]
fn test_parse_global_paths() {
    let args = Args::try_parse_from([
        "numbler",
        "--leaderboard",
        "scores.txt",
        "--config",
        "my.toml",
    ])
    .unwrap();
    assert_eq!(args.leaderboard.unwrap().to_str(), Some("scores.txt"));
    assert_eq!(args.config.unwrap().to_str(), Some("my.toml"));
}

#[test]
fn test_parse_play_default() {
    let args = Args::try_parse_from(["numbler", "play"]).unwrap();
    match args.command {
        Some(Command::Play {
            difficulty,
            digits,
            attempts,
        }) => {
            assert!(difficulty.is_none());
            assert!(digits.is_none());
            assert!(attempts.is_none());
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_difficulty() {
    let args = Args::try_parse_from(["numbler", "play", "--difficulty", "Expert"]).unwrap();
    match args.command {
        Some(Command::Play { difficulty, .. }) => {
            assert_eq!(difficulty, Some(Difficulty::Expert));
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_custom() {
    let args =
        Args::try_parse_from(["numbler", "play", "--digits", "5", "--attempts", "9"]).unwrap();
    match args.command {
        Some(Command::Play {
            digits, attempts, ..
        }) => {
            assert_eq!(digits, Some(5));
            assert_eq!(attempts, Some(9));
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_play_custom_requires_both() {
    assert!(Args::try_parse_from(["numbler", "play", "--digits", "5"]).is_err());
}

#[test]
fn test_play_difficulty_conflicts_with_custom() {
    let result = Args::try_parse_from([
        "numbler",
        "play",
        "-d",
        "easy",
        "--digits",
        "5",
        "--attempts",
        "9",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_invalid_difficulty() {
    assert!(Args::try_parse_from(["numbler", "play", "-d", "nightmare"]).is_err());
}

#[test]
fn test_parse_leaderboard_json() {
    let args = Args::try_parse_from(["numbler", "leaderboard", "--json"]).unwrap();
    match args.command {
        Some(Command::Leaderboard { json }) => assert!(json),
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_export_defaults() {
    let args = Args::try_parse_from(["numbler", "export"]).unwrap();
    match args.command {
        Some(Command::Export { output, format }) => {
            assert!(output.is_none());
            assert_eq!(format, ExportFormat::Tsv);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_export_json_to_file() {
    let args =
        Args::try_parse_from(["numbler", "export", "-f", "json", "-o", "out.json"]).unwrap();
    match args.command {
        Some(Command::Export { output, format }) => {
            assert_eq!(output.unwrap().to_str(), Some("out.json"));
            assert_eq!(format, ExportFormat::Json);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_invalid_subcommand() {
    assert!(Args::try_parse_from(["numbler", "cheat"]).is_err());
}
