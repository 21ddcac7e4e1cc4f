// src/model/parse.rs

//! Boundary parsing: comma-separated symbol and probability strings.
//!
//! This is the contract the (external) input layer programs against.
//! File contents loaded from disk are plain text and arrive here as raw
//! comma-separated strings; each token is trimmed of surrounding
//! whitespace before interpretation.

use super::alphabet::{Alphabet, Symbol};
use crate::utils::error::{Result, SfError};
use std::collections::HashSet;

impl Alphabet {
    /// Parses `"A,B,C"` / `"0.5,0.3,0.2"` style inputs into a validated
    /// alphabet.
    ///
    /// # Errors
    /// * `InvalidAlphabet` — empty input, empty or duplicate symbol
    ///   token, or symbol/probability count mismatch.
    /// * `InvalidProbabilities` — unparseable number, value outside
    ///   (0, 1], or sum away from 1.
    pub fn parse(raw_symbols: &str, raw_probabilities: &str) -> Result<Self> {
        let raw_symbols = raw_symbols.trim();
        let raw_probabilities = raw_probabilities.trim();
        if raw_symbols.is_empty() {
            return Err(SfError::InvalidAlphabet(
                "symbol list is empty".to_string(),
            ));
        }

        let symbols: Vec<Symbol> = raw_symbols
            .split(',')
            .map(|token| Symbol::from(token.trim()))
            .collect();
        if symbols.iter().any(|s| s.as_str().is_empty()) {
            return Err(SfError::InvalidAlphabet(
                "symbol list contains an empty token".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !seen.insert(symbol.clone()) {
                return Err(SfError::InvalidAlphabet(format!(
                    "duplicate symbol '{}'",
                    symbol
                )));
            }
        }

        let probabilities = parse_probabilities(raw_probabilities)?;
        if symbols.len() != probabilities.len() {
            return Err(SfError::InvalidAlphabet(format!(
                "{} symbols but {} probabilities",
                symbols.len(),
                probabilities.len()
            )));
        }

        Alphabet::new(symbols.into_iter().zip(probabilities).collect())
    }
}

fn parse_probabilities(raw: &str) -> Result<Vec<f64>> {
    if raw.is_empty() {
        return Err(SfError::InvalidProbabilities(
            "probability list is empty".to_string(),
        ));
    }
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| {
                SfError::InvalidProbabilities(format!(
                    "'{}' is not a number",
                    token
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_tokens() {
        let alphabet = Alphabet::parse(" A, B ,C ", " 0.5 ,0.3, 0.2").unwrap();
        let symbols: Vec<String> =
            alphabet.iter().map(|(s, _)| s.to_string()).collect();
        assert_eq!(symbols, ["A", "B", "C"]);
        assert_eq!(alphabet.probability_of(&Symbol::from('A')), Some(0.5));
    }

    #[test]
    fn parses_multi_character_tokens() {
        let alphabet = Alphabet::parse("sh,ch", "0.6,0.4").unwrap();
        assert_eq!(alphabet.probability_of(&Symbol::from("sh")), Some(0.6));
    }

    #[test]
    fn rejects_count_mismatch() {
        let err = Alphabet::parse("A,B,C", "0.5,0.5").unwrap_err();
        assert!(matches!(err, SfError::InvalidAlphabet(_)));
    }

    #[test]
    fn rejects_non_numeric_probability() {
        let err = Alphabet::parse("A,B", "0.5,zero").unwrap_err();
        assert!(matches!(err, SfError::InvalidProbabilities(_)));
    }

    #[test]
    fn rejects_duplicate_symbol_token() {
        let err = Alphabet::parse("A,B,A", "0.4,0.3,0.3").unwrap_err();
        assert!(matches!(err, SfError::InvalidAlphabet(_)));
    }

    #[test]
    fn rejects_empty_input() {
        let err = Alphabet::parse("   ", "0.5,0.5").unwrap_err();
        assert!(matches!(err, SfError::InvalidAlphabet(_)));
    }
}
