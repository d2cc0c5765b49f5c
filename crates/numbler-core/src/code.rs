//! Digit sequences used for both secrets and guesses.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered sequence of decimal digits (each 0-9).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Code(Vec<u8>);

impl Code {
    /// Build a code from raw digit values, rejecting anything above 9.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(Error::InvalidDigit(char::from(b'0'.saturating_add(bad))));
        }
        Ok(Self(digits))
    }

    /// Draw `len` digits independently and uniformly from 0-9.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self((0..len).map(|_| rng.gen_range(0..=9)).collect())
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(Error::InvalidDigit(c))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_and_display() {
        let code: Code = "0427".parse().unwrap();
        assert_eq!(code.digits(), &[0, 4, 2, 7]);
        assert_eq!(code.to_string(), "0427");
    }

    #[test]
    fn test_parse_rejects_non_digit() {
        assert!(matches!("12a4".parse::<Code>(), Err(Error::InvalidDigit('a'))));
    }

    #[test]
    fn test_from_digits_rejects_out_of_range() {
        assert!(Code::from_digits(vec![1, 2, 10]).is_err());
        assert!(Code::from_digits(vec![0, 9]).is_ok());
    }

    #[test]
    fn test_random_length_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=6 {
            let code = Code::random(len, &mut rng);
            assert_eq!(code.len(), len);
            assert!(code.digits().iter().all(|&d| d <= 9));
        }
    }

    #[test]
    fn test_random_covers_all_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = Code::random(500, &mut rng);
        for v in 0..=9u8 {
            assert!(code.digits().contains(&v), "digit {} never drawn", v);
        }
    }
}
