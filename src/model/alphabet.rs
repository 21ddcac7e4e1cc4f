// src/model/alphabet.rs

//! The probability model: symbols and their validated occurrence
//! probabilities.
//!
//! An [`Alphabet`] is immutable once constructed. Validation happens up
//! front in [`Alphabet::new`], so every other component can assume the
//! probabilities are individually in (0, 1] and sum to 1.

use crate::utils::error::{Result, SfError};
use std::fmt;

/// Allowed deviation of the probability sum from 1.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// One unit of the alphabet: a single character or a short string token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c.to_string())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered sequence of `(Symbol, probability)` pairs.
///
/// Insertion order is preserved. It does not affect the correctness of
/// the generated code but it does drive tie-breaking: the builder's
/// stable sort keeps equal-probability symbols in this order, which is
/// what makes table construction reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    entries: Vec<(Symbol, f64)>,
}

impl Alphabet {
    /// Validates and constructs an alphabet.
    ///
    /// # Errors
    /// * `InvalidAlphabet` if `entries` is empty.
    /// * `InvalidProbabilities` if any probability falls outside (0, 1]
    ///   or the sum deviates from 1 by more than
    ///   [`PROBABILITY_SUM_TOLERANCE`].
    pub fn new(entries: Vec<(Symbol, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(SfError::InvalidAlphabet("alphabet is empty".to_string()));
        }
        for (symbol, p) in &entries {
            if !p.is_finite() || *p <= 0.0 || *p > 1.0 {
                return Err(SfError::InvalidProbabilities(format!(
                    "probability {} for symbol '{}' is outside (0, 1]",
                    p, symbol
                )));
            }
        }
        let sum: f64 = entries.iter().map(|(_, p)| p).sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(SfError::InvalidProbabilities(format!(
                "probabilities sum to {}, expected 1",
                sum
            )));
        }
        Ok(Self { entries })
    }

    /// Convenience constructor from anything symbol-like.
    pub fn from_pairs<S, I>(pairs: I) -> Result<Self>
    where
        S: Into<Symbol>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self::new(pairs.into_iter().map(|(s, p)| (s.into(), p)).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated alphabet; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, f64)> {
        self.entries.iter().map(|(s, p)| (s, *p))
    }

    pub fn probability_of(&self, symbol: &Symbol) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, p)| *p)
    }
}
