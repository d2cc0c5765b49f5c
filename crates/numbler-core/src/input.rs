//! Player input abstraction.
//!
//! The core never reads the terminal directly. Controllers supply an
//! [`InputProvider`] (raw keyboard in the CLI, [`ScriptedInput`] in tests) and
//! [`GuessBuffer`] turns its events into a submitted guess.

use std::collections::VecDeque;

use crate::code::Code;
use crate::error::{Error, Result};

/// A single key press as seen by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(u8),
    Char(char),
    Backspace,
    Submit,
    /// Escape, Ctrl+C, or end of input.
    Quit,
}

impl InputEvent {
    /// Map a typed character to an event.
    pub fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' => Self::Submit,
            '\u{8}' | '\u{7f}' => Self::Backspace,
            c => match c.to_digit(10) {
                Some(d) => Self::Digit(d as u8),
                None => Self::Char(c),
            },
        }
    }

    /// Escape/Ctrl+C, or `q` typed anywhere a quit is accepted.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit | Self::Char('q') | Self::Char('Q'))
    }
}

/// Source of key presses. Blocks until the next key is available.
pub trait InputProvider {
    fn next_event(&mut self) -> Result<InputEvent>;
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn next_event(&mut self) -> Result<InputEvent> {
        (**self).next_event()
    }
}

/// Input provider that replays a fixed sequence, then reports `Quit`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Script typed text, one event per character.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(InputEvent::from_char))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}

/// What a key press did to the guess being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Editing,
    Submitted(Code),
    Quit,
}

/// Digits typed so far for the current guess.
#[derive(Debug, Clone)]
pub struct GuessBuffer {
    digit_count: usize,
    digits: Vec<u8>,
}

impl GuessBuffer {
    pub fn new(digit_count: usize) -> Self {
        Self {
            digit_count,
            digits: Vec::with_capacity(digit_count),
        }
    }

    /// Apply one key press.
    ///
    /// Digits past `digit_count` are ignored. Submitting a short guess fails
    /// with `InvalidGuessLength` and keeps what was typed.
    pub fn apply(&mut self, event: InputEvent) -> Result<Entry> {
        match event {
            e if e.is_quit() => return Ok(Entry::Quit),
            InputEvent::Digit(d) if d <= 9 => {
                if self.digits.len() < self.digit_count {
                    self.digits.push(d);
                }
            }
            InputEvent::Backspace => {
                self.digits.pop();
            }
            InputEvent::Submit => {
                if self.digits.len() != self.digit_count {
                    return Err(Error::InvalidGuessLength {
                        expected: self.digit_count,
                        actual: self.digits.len(),
                    });
                }
                let code = Code::from_digits(std::mem::take(&mut self.digits))?;
                return Ok(Entry::Submitted(code));
            }
            _ => {}
        }
        Ok(Entry::Editing)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    pub fn is_full(&self) -> bool {
        self.digits.len() == self.digit_count
    }
}

/// Read one guess from `input`.
///
/// `on_update` runs before every key press with the current buffer and the
/// last rejected submission, if any, so the caller can redraw. Returns
/// `Ok(None)` when the player quits.
pub fn read_guess<P, F>(input: &mut P, digit_count: usize, mut on_update: F) -> Result<Option<Code>>
where
    P: InputProvider + ?Sized,
    F: FnMut(&GuessBuffer, Option<&Error>) -> Result<()>,
{
    let mut buffer = GuessBuffer::new(digit_count);
    let mut rejected: Option<Error> = None;

    loop {
        on_update(&buffer, rejected.as_ref())?;
        let event = input.next_event()?;
        match buffer.apply(event) {
            Ok(Entry::Editing) => rejected = None,
            Ok(Entry::Submitted(code)) => return Ok(Some(code)),
            Ok(Entry::Quit) => return Ok(None),
            Err(e @ Error::InvalidGuessLength { .. }) => rejected = Some(e),
            Err(e) => return Err(e),
        }
    }
}
