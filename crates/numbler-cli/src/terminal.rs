//! Terminal I/O: raw single-key input, screen clearing, and line prompts.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute};
use numbler_core::{InputEvent, InputProvider};

/// Reads one key at a time from the terminal.
///
/// Raw mode is only held while waiting for a key, so normal `println!`
/// output keeps working between reads.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputProvider for KeyboardInput {
    fn next_event(&mut self) -> numbler_core::Result<InputEvent> {
        io::stdout().flush()?;
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                // Windows reports both press and release.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(input) = map_key(key) {
                    return Ok(input);
                }
            }
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Translate a key event; `None` for keys the game ignores.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(InputEvent::Backspace),
        KeyCode::Char(c) => Some(InputEvent::from_char(c)),
        _ => None,
    }
}

pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// Block until any key is pressed.
pub fn pause(input: &mut impl InputProvider) -> anyhow::Result<()> {
    print!("\nPress any key to continue...");
    input.next_event()?;
    println!();
    Ok(())
}

/// Read one line from stdin after printing `prompt`.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Keep asking until the player types a number inside `range`.
pub fn prompt_number(prompt: &str, range: RangeInclusive<u32>) -> io::Result<u32> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse::<u32>() {
            Ok(n) if range.contains(&n) => return Ok(n),
            _ => println!(
                "Invalid input. Enter a number between {} and {}.",
                range.start(),
                range.end()
            ),
        }
    }
}
