use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Result for one position of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Mark {
    /// Digit and position both match.
    #[strum(serialize = "G")]
    Correct,
    /// Digit occurs at another, not yet accounted-for position.
    #[strum(serialize = "Y")]
    Misplaced,
    /// No remaining occurrence of the digit in the secret.
    #[strum(serialize = "X")]
    Absent,
}

impl Mark {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Ordered marks for one guess; always the same length as the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    pub(crate) fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|m| *m == Mark::Correct)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|m| **m == mark).count()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

/// Whether the secret is numerically above or below a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Hint {
    #[strum(serialize = "UP")]
    Higher,
    #[strum(serialize = "DOWN")]
    Lower,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_display() {
        let feedback = Feedback::new(vec![Mark::Correct, Mark::Misplaced, Mark::Absent]);
        assert_eq!(feedback.to_string(), "GYX");
    }

    #[test]
    fn test_is_solved() {
        assert!(Feedback::new(vec![Mark::Correct; 4]).is_solved());
        assert!(!Feedback::new(vec![Mark::Correct, Mark::Absent]).is_solved());
        assert!(!Feedback::new(vec![]).is_solved());
    }
}
