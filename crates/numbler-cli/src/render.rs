//! Screen rendering with block-digit glyphs and colored feedback.
//!
//! Every function returns the finished screen as a `String`; callers decide
//! when to clear and print.

use std::fmt::Write as _;

use numbler_core::config::GameConfig;
use numbler_core::{Error, GameSession, GuessBuffer, Hint, Mark, ScoreEntry, SessionStatus};
use owo_colors::OwoColorize;

const GLYPH_HEIGHT: usize = 5;
const GLYPH_WIDTH: usize = 5;
const MIN_FRAME_WIDTH: usize = 64;

const DIGIT_GLYPHS: [[&str; GLYPH_HEIGHT]; 10] = [
    [" ### ", "#   #", "#   #", "#   #", " ### "],
    ["  #  ", " ##  ", "  #  ", "  #  ", " ### "],
    [" ### ", "#   #", "  ## ", " #   ", "#####"],
    ["#### ", "    #", " ### ", "    #", "#### "],
    ["#   #", "#   #", "#####", "    #", "    #"],
    ["#####", "#    ", "#### ", "    #", "#### "],
    [" ### ", "#    ", "#### ", "#   #", " ### "],
    ["#####", "    #", "   # ", "  #  ", "  #  "],
    [" ### ", "#   #", " ### ", "#   #", " ### "],
    [" ### ", "#   #", " ####", "    #", " ### "],
];

const EMPTY_SLOT: [&str; GLYPH_HEIGHT] = ["     ", "     ", "     ", "     ", "_____"];
const ARROW_UP: [&str; GLYPH_HEIGHT] = ["  ^  ", " /|\\ ", "  |  ", "  |  ", "  |  "];
const ARROW_DOWN: [&str; GLYPH_HEIGHT] = ["  |  ", "  |  ", "  |  ", " \\|/ ", "  v  "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Mark(Mark),
    Typing,
    Pending,
}

impl Tone {
    fn paint(self, s: &str) -> String {
        match self {
            Self::Plain => s.to_string(),
            Self::Mark(Mark::Correct) => s.green().to_string(),
            Self::Mark(Mark::Misplaced) => s.yellow().to_string(),
            Self::Mark(Mark::Absent) => s.red().to_string(),
            Self::Typing => s.magenta().to_string(),
            Self::Pending => s.cyan().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Cell {
    Digit(u8, Tone),
    Empty,
    Arrow(Hint),
}

impl Cell {
    fn rows(&self) -> [&'static str; GLYPH_HEIGHT] {
        match self {
            Self::Digit(d, _) => DIGIT_GLYPHS[*d as usize % 10],
            Self::Empty => EMPTY_SLOT,
            Self::Arrow(Hint::Higher) => ARROW_UP,
            Self::Arrow(Hint::Lower) => ARROW_DOWN,
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Digit(_, tone) => *tone,
            Self::Empty => Tone::Pending,
            Self::Arrow(_) => Tone::Plain,
        }
    }
}

/// Boxed output with a fixed inner width.
struct Frame {
    width: usize,
    out: String,
}

impl Frame {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_FRAME_WIDTH),
            out: String::new(),
        }
    }

    fn rule(&mut self, fill: char) {
        let line = format!("+{}+", fill.to_string().repeat(self.width));
        let _ = writeln!(self.out, "{}", line.cyan());
    }

    /// Center `text` whose on-screen width is `visible`.
    fn centered(&mut self, text: &str, visible: usize) {
        let pad = self.width.saturating_sub(visible);
        let left = pad / 2;
        let _ = writeln!(
            self.out,
            "{}{}{}{}{}",
            "|".cyan(),
            " ".repeat(left),
            text,
            " ".repeat(pad - left),
            "|".cyan()
        );
    }

    fn left(&mut self, text: &str, visible: usize) {
        let pad = self.width.saturating_sub(visible + 1);
        let _ = writeln!(
            self.out,
            "{} {}{}{}",
            "|".cyan(),
            text,
            " ".repeat(pad),
            "|".cyan()
        );
    }

    fn text(&mut self, text: &str) {
        self.centered(text, text.chars().count());
    }

    fn glyphs(&mut self, cells: &[Cell]) {
        let visible = cells.len() * (GLYPH_WIDTH + 1);
        for row in 0..GLYPH_HEIGHT {
            let line: String = cells
                .iter()
                .map(|cell| format!("{} ", cell.tone().paint(cell.rows()[row])))
                .collect();
            self.centered(&line, visible);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn frame_width(digit_count: usize) -> usize {
    (digit_count + 1) * (GLYPH_WIDTH + 1) + 16
}

fn attempt_cells(digits: &[u8], marks: &[Mark], hint: Option<Hint>) -> Vec<Cell> {
    let mut cells: Vec<Cell> = digits
        .iter()
        .zip(marks)
        .map(|(&d, &m)| Cell::Digit(d, Tone::Mark(m)))
        .collect();
    if let Some(hint) = hint {
        cells.push(Cell::Arrow(hint));
    }
    cells
}

fn legend() -> (String, usize) {
    let plain = "Legend: Green=Correct, Yellow=Misplaced, Red=Absent";
    let colored = format!(
        "Legend: {}=Correct, {}=Misplaced, {}=Absent",
        "Green".green(),
        "Yellow".yellow(),
        "Red".red()
    );
    (colored, plain.chars().count())
}

/// Main menu text.
pub fn render_menu() -> String {
    let mut frame = Frame::new(MIN_FRAME_WIDTH);
    frame.rule('=');
    frame.text("Welcome to NUMBLER!");
    frame.rule('=');
    let out = frame.finish();

    let mut menu = String::new();
    let _ = writeln!(menu, "{}", out);
    let _ = writeln!(menu, "Choose an option:");
    let _ = writeln!(menu, "1. Easy   (3 digits, 6 attempts)");
    let _ = writeln!(menu, "2. Medium (4 digits, 6 attempts)");
    let _ = writeln!(menu, "3. Hard   (5 digits, 6 attempts)");
    let _ = writeln!(menu, "4. Expert (6 digits, 8 attempts)");
    let _ = writeln!(menu, "5. Custom");
    let _ = writeln!(menu, "6. Leaderboard");
    let _ = writeln!(menu, "7. Quit");
    let _ = write!(menu, "Choice (1-7): ");
    menu
}

pub fn render_instructions(config: &GameConfig, show_hints: bool) -> String {
    let mut frame = Frame::new(frame_width(config.digit_count));
    frame.rule('=');
    frame.text("HOW TO PLAY");
    frame.rule('-');
    let lines = [
        format!("* Guess the secret {}-digit code.", config.digit_count),
        format!("* You have {} attempts.", config.max_attempts),
        "* Digits may repeat.".to_string(),
    ];
    for line in &lines {
        frame.left(line, line.chars().count());
    }
    frame.left(
        &format!("* {}: right digit, right place.", "GREEN".green()),
        "* GREEN: right digit, right place.".len(),
    );
    frame.left(
        &format!("* {}: right digit, wrong place.", "YELLOW".yellow()),
        "* YELLOW: right digit, wrong place.".len(),
    );
    frame.left(
        &format!("* {}: digit not in the code.", "RED".red()),
        "* RED: digit not in the code.".len(),
    );
    if show_hints {
        let line = "* Arrows show whether the code is higher or lower.";
        frame.left(line, line.len());
    }
    frame.rule('=');
    frame.finish()
}

/// Board with every previous attempt and the remaining count.
pub fn render_board(session: &GameSession, show_hints: bool) -> String {
    let mut frame = Frame::new(frame_width(session.digit_count()));
    frame.rule('=');
    frame.text("N U M B L E R");
    frame.text(&format!("Guess the {}-digit code!", session.digit_count()));
    frame.rule('-');
    let (legend, visible) = legend();
    frame.centered(&legend, visible);
    frame.rule('-');

    if !session.attempts().is_empty() {
        frame.left("Previous guesses:", "Previous guesses:".len());
        for (i, attempt) in session.attempts().iter().enumerate() {
            let label = format!("Attempt {}:", i + 1);
            frame.left(&label, label.len());
            let hint = attempt.hint.filter(|_| show_hints);
            frame.glyphs(&attempt_cells(
                attempt.guess.digits(),
                attempt.feedback.marks(),
                hint,
            ));
        }
        frame.rule('-');
    }

    frame.text(&format!("Attempts left: {}", session.remaining_attempts()));
    frame.rule('-');
    frame.finish()
}

/// Guess being typed, pending slots, and the last rejection if any.
pub fn render_input(buffer: &GuessBuffer, rejected: Option<&Error>) -> String {
    let mut frame = Frame::new(frame_width(buffer.digit_count()));
    frame.left("Current guess:", "Current guess:".len());

    let mut cells: Vec<Cell> = buffer
        .digits()
        .iter()
        .map(|&d| Cell::Digit(d, Tone::Typing))
        .collect();
    cells.resize(buffer.digit_count(), Cell::Empty);
    frame.glyphs(&cells);

    frame.rule('-');
    frame.text("0-9 to type, Backspace to delete, Enter to submit, Q to quit");
    if let Some(err) = rejected {
        let msg = match err {
            Error::InvalidGuessLength { expected, .. } => {
                format!("Need exactly {} digits!", expected)
            }
            other => other.to_string(),
        };
        frame.centered(&msg.red().to_string(), msg.chars().count());
    }
    frame.rule('=');
    frame.finish()
}

/// End-of-game banner revealing the secret.
pub fn render_result(session: &GameSession) -> String {
    let mut frame = Frame::new(frame_width(session.digit_count()));
    frame.rule('=');
    match session.status() {
        SessionStatus::Won => {
            frame.text("*** CONGRATULATIONS! ***");
            frame.text(&format!(
                "You cracked it in {} attempt(s)!",
                session.attempts_used()
            ));
            if let Some(score) = session.score() {
                frame.text(&format!("Score: {}", score));
            }
        }
        SessionStatus::Lost | SessionStatus::InProgress => {
            frame.text("*** GAME OVER ***");
            frame.text("The code was:");
        }
    }
    frame.rule('-');
    let tone = if session.status() == SessionStatus::Won {
        Tone::Mark(Mark::Correct)
    } else {
        Tone::Plain
    };
    let cells: Vec<Cell> = session
        .secret()
        .digits()
        .iter()
        .map(|&d| Cell::Digit(d, tone))
        .collect();
    frame.glyphs(&cells);
    frame.rule('=');
    frame.finish()
}

pub fn render_leaderboard(entries: &[ScoreEntry]) -> String {
    let mut frame = Frame::new(MIN_FRAME_WIDTH);
    frame.rule('=');
    frame.text("LEADERBOARD");
    frame.rule('-');

    if entries.is_empty() {
        frame.text("The leaderboard is empty. Be the first!");
    } else {
        let header = format!(
            "{:<5}{:<18}{:<10}{:<10}{:<10}",
            "No.", "Name", "Score", "Digits", "Attempts"
        );
        frame.left(&header, header.chars().count());
        frame.rule('-');
        for (i, entry) in entries.iter().enumerate() {
            let row = format!(
                "{:<5}{:<18}{:<10}{:<10}{:<10}",
                format!("{}.", i + 1),
                entry.player_name(),
                entry.score(),
                entry.digit_count(),
                entry.attempts_used()
            );
            frame.left(&row, row.chars().count());
        }
    }

    frame.rule('=');
    frame.finish()
}
