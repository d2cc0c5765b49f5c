//! Guess feedback.
//!
//! This module contains:
//! - `Mark` - per-position result (Correct, Misplaced, Absent)
//! - `Feedback` - the ordered marks for one guess
//! - `Hint` - higher/lower hint shown next to a wrong guess
//! - `evaluate` - the count-consuming two-pass evaluator

mod evaluator;
mod mark;

pub use evaluator::*;
pub use mark::*;
