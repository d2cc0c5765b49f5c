//! Interactive play: main menu, guess loop, and score recording.

use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use numbler_core::config::{leaderboard::CAPACITY, policy};
use numbler_core::{
    Difficulty, GameConfig, GameSession, InputEvent, InputProvider, Numbler, SessionStatus,
    read_guess,
};
use owo_colors::OwoColorize;
use tracing::info;

use crate::render;
use crate::settings::Settings;
use crate::terminal::{self, KeyboardInput};

/// What the player picked on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameConfig),
    Custom,
    Leaderboard,
    Quit,
    /// Unrecognised key; play the configured default.
    Fallback(GameConfig),
}

pub fn menu_choice(event: InputEvent, default: Difficulty) -> MenuChoice {
    match event {
        InputEvent::Digit(d @ 1..=4) => Difficulty::from_menu_key(char::from(b'0' + d))
            .map(|difficulty| MenuChoice::Play(difficulty.config()))
            .unwrap_or(MenuChoice::Fallback(default.config())),
        InputEvent::Digit(5) => MenuChoice::Custom,
        InputEvent::Digit(6) => MenuChoice::Leaderboard,
        InputEvent::Digit(7) => MenuChoice::Quit,
        e if e.is_quit() => MenuChoice::Quit,
        _ => MenuChoice::Fallback(default.config()),
    }
}

/// Config for the `play` subcommand: custom values win over a preset.
pub fn resolve_config(
    difficulty: Option<Difficulty>,
    digits: Option<usize>,
    attempts: Option<u32>,
    default: Difficulty,
) -> Result<GameConfig> {
    match (digits, attempts) {
        (Some(digits), Some(attempts)) => {
            let config = GameConfig::new(digits, attempts);
            config.validate_policy()?;
            Ok(config)
        }
        (None, None) => Ok(difficulty.unwrap_or(default).config()),
        _ => bail!("--digits and --attempts must be given together"),
    }
}

/// Main menu loop.
pub fn run_menu(numbler: &mut Numbler, settings: &Settings) -> Result<()> {
    let mut input = KeyboardInput::new();

    loop {
        terminal::clear_screen()?;
        print!("{}", render::render_menu());
        let event = input.next_event()?;
        println!();

        let config = match menu_choice(event, settings.default_difficulty) {
            MenuChoice::Quit => break,
            MenuChoice::Leaderboard => {
                show_leaderboard(numbler, &mut input)?;
                continue;
            }
            MenuChoice::Play(config) => config,
            MenuChoice::Custom => prompt_custom_config()?,
            MenuChoice::Fallback(config) => {
                println!(
                    "Invalid choice. Starting {} difficulty...",
                    settings.default_difficulty.label()
                );
                thread::sleep(Duration::from_secs(1));
                config
            }
        };

        play_game(numbler, &mut input, config, settings)?;

        if !ask_play_again(&mut input)? {
            break;
        }
    }

    println!("\nThanks for playing NUMBLER!");
    Ok(())
}

/// Play games with a fixed config until the player declines another round.
pub fn run_single(numbler: &mut Numbler, settings: &Settings, config: GameConfig) -> Result<()> {
    let mut input = KeyboardInput::new();
    loop {
        play_game(numbler, &mut input, config, settings)?;
        if !ask_play_again(&mut input)? {
            break;
        }
    }
    println!("\nThanks for playing NUMBLER!");
    Ok(())
}

/// Run one session from instructions to result.
///
/// Quitting during guess entry abandons the session without recording anything.
pub fn play_game<P: InputProvider>(
    numbler: &mut Numbler,
    input: &mut P,
    config: GameConfig,
    settings: &Settings,
) -> Result<()> {
    let mut session = numbler.start_session(config)?;

    terminal::clear_screen()?;
    print!(
        "{}",
        render::render_instructions(&config, settings.show_hints)
    );
    terminal::pause(input)?;

    while session.status() == SessionStatus::InProgress {
        let guess = read_guess(input, session.digit_count(), |buffer, rejected| {
            terminal::clear_screen()?;
            print!("{}", render::render_board(&session, settings.show_hints));
            print!("{}", render::render_input(buffer, rejected));
            Ok(())
        })?;

        let Some(guess) = guess else {
            info!(
                "Session abandoned after {} attempt(s)",
                session.attempts_used()
            );
            return Ok(());
        };
        numbler.submit_guess(&mut session, guess)?;
    }

    terminal::clear_screen()?;
    print!("{}", render::render_result(&session));

    if session.status() == SessionStatus::Won {
        record_win(numbler, session, input)?;
    } else {
        terminal::pause(input)?;
    }
    Ok(())
}

fn record_win<P: InputProvider>(
    numbler: &mut Numbler,
    session: GameSession,
    input: &mut P,
) -> Result<()> {
    let Some(score) = session.score() else {
        return Ok(());
    };

    if !numbler.qualifies(score) {
        println!(
            "\nYour score of {} did not make the top {}.",
            score, CAPACITY
        );
        return terminal::pause(input);
    }

    let name = terminal::prompt_line(&format!("\nYour score: {}. Enter your name: ", score))?;
    match numbler.finalize_win(session, &name) {
        Ok(entry) => info!(
            "{} ranked with {} points",
            entry.player_name(),
            entry.score()
        ),
        Err(e) if e.is_storage_warning() => {
            eprintln!("{} {}", "Warning:".yellow(), e);
        }
        Err(e) => return Err(e.into()),
    }

    show_leaderboard(numbler, input)
}

fn show_leaderboard<P: InputProvider>(numbler: &Numbler, input: &mut P) -> Result<()> {
    terminal::clear_screen()?;
    print!("{}", render::render_leaderboard(numbler.leaderboard()));
    terminal::pause(input)
}

fn prompt_custom_config() -> Result<GameConfig> {
    let digits = terminal::prompt_number(
        &format!(
            "Number of digits ({}-{}): ",
            policy::MIN_DIGITS,
            policy::MAX_DIGITS
        ),
        policy::MIN_DIGITS as u32..=policy::MAX_DIGITS as u32,
    )?;
    let attempts = terminal::prompt_number(
        &format!(
            "Number of attempts ({}-{}): ",
            policy::MIN_ATTEMPTS,
            policy::MAX_ATTEMPTS
        ),
        policy::MIN_ATTEMPTS..=policy::MAX_ATTEMPTS,
    )?;

    let config = GameConfig::new(digits as usize, attempts);
    config.validate_policy()?;
    Ok(config)
}

fn ask_play_again<P: InputProvider>(input: &mut P) -> Result<bool> {
    print!("\nPlay again? (y/n): ");
    let event = input.next_event()?;
    println!();
    Ok(matches!(event, InputEvent::Char('y') | InputEvent::Char('Y')))
}
