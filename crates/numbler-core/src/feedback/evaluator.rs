use std::cmp::Ordering;

use crate::code::Code;
use crate::error::{Error, Result};
use crate::feedback::{Feedback, Hint, Mark};

/// Score a guess against the secret.
///
/// Exact matches are marked first and consume one occurrence of their digit;
/// the remaining positions then draw on whatever occurrences are left, so a
/// digit never earns more Correct+Misplaced marks than it appears in the secret.
pub fn evaluate(secret: &Code, guess: &Code) -> Result<Feedback> {
    if secret.len() != guess.len() {
        return Err(Error::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut remaining = [0usize; 10];
    for &d in secret.digits() {
        remaining[d as usize] += 1;
    }

    let mut marks = vec![Mark::Absent; guess.len()];

    for (i, (&s, &g)) in secret.digits().iter().zip(guess.digits()).enumerate() {
        if s == g {
            marks[i] = Mark::Correct;
            remaining[g as usize] -= 1;
        }
    }

    for (i, &g) in guess.digits().iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        let slot = &mut remaining[g as usize];
        if *slot > 0 {
            marks[i] = Mark::Misplaced;
            *slot -= 1;
        }
    }

    Ok(Feedback::new(marks))
}

/// Higher/lower hint comparing equal-length codes as numbers.
///
/// Returns `None` when the guess is the secret.
pub fn hint(secret: &Code, guess: &Code) -> Option<Hint> {
    match secret.digits().cmp(guess.digits()) {
        Ordering::Greater => Some(Hint::Higher),
        Ordering::Less => Some(Hint::Lower),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn marks(secret: &str, guess: &str) -> String {
        evaluate(&code(secret), &code(guess)).unwrap().to_string()
    }

    #[test]
    fn test_exact_match_all_correct() {
        assert_eq!(marks("4821", "4821"), "GGGG");
        assert_eq!(marks("000", "000"), "GGG");
    }

    #[test]
    fn test_disjoint_all_absent() {
        assert_eq!(marks("1234", "5678"), "XXXX");
    }

    #[test]
    fn test_misplaced() {
        assert_eq!(marks("1234", "4321"), "YYYY");
        assert_eq!(marks("1234", "1243"), "GGYY");
    }

    #[test]
    fn test_duplicate_guess_digits_consume_secret_count() {
        // Both 1's in the secret are matched exactly; the extra 1's have nothing left.
        assert_eq!(marks("1123", "1111"), "GGXX");
    }

    #[test]
    fn test_exact_match_takes_priority_over_earlier_misplaced() {
        // Position 0 would grab the only 2 if scanned first; the exact match at 3 wins.
        assert_eq!(marks("1332", "2442"), "XXXG");
    }

    #[test]
    fn test_duplicate_secret_digits() {
        assert_eq!(marks("1122", "2211"), "YYYY");
        assert_eq!(marks("1122", "2000"), "YXXX");
    }

    #[test]
    fn test_length_mismatch() {
        let err = evaluate(&code("123"), &code("1234")).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint(&code("500"), &code("123")), Some(Hint::Higher));
        assert_eq!(hint(&code("099"), &code("100")), Some(Hint::Lower));
        assert_eq!(hint(&code("042"), &code("042")), None);
    }
}
