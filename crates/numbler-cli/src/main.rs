mod cli;
mod commands;
mod render;
mod settings;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use numbler_core::Numbler;
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they don't tear the game screen; quiet unless RUST_LOG is set.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("numbler=warn,numbler_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::resolve(args.config.as_deref());
    let leaderboard_path = settings.leaderboard_path(args.leaderboard.as_deref());
    info!("Using leaderboard at {:?}", leaderboard_path);
    let mut numbler = Numbler::open(&leaderboard_path);

    match args.command {
        Some(Command::Play {
            difficulty,
            digits,
            attempts,
        }) => {
            let config = commands::play::resolve_config(
                difficulty,
                digits,
                attempts,
                settings.default_difficulty,
            )?;
            commands::play::run_single(&mut numbler, &settings, config)
        }
        Some(Command::Leaderboard { json }) => commands::leaderboard::run(&numbler, json),
        Some(Command::Export { output, format }) => {
            commands::export::run(numbler.leaderboard(), output.as_deref(), format)
        }
        None => commands::play::run_menu(&mut numbler, &settings),
    }
}
