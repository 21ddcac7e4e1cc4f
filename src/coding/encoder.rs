// src/coding/encoder.rs

//! Encoding text against a code table.
//!
//! Symbols absent from the table are skipped, not fatal: partially
//! matching input still produces useful output, and the skipped symbols
//! are reported back to the caller alongside the bit sequence. Only a
//! completely empty result is an error.

use crate::code::{Bits, CodeTable};
use crate::model::Symbol;
use crate::utils::error::{Result, SfError};
use log::warn;
use std::collections::BTreeSet;

/// The outcome of a successful encode: the bit sequence plus every
/// distinct input symbol that had no codeword and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bits: Bits,
    pub unmatched: BTreeSet<Symbol>,
}

impl Encoded {
    /// True if every input symbol had a codeword.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Encodes a symbol sequence against `table`.
///
/// # Errors
/// `EmptyEncodingResult` if no bits come out — the input was empty or
/// none of its symbols appear in the table.
pub fn encode(table: &CodeTable, symbols: &[Symbol]) -> Result<Encoded> {
    let mut bits = Bits::new();
    let mut unmatched = BTreeSet::new();
    for symbol in symbols {
        match table.get(symbol) {
            Some(code) => bits.extend(code),
            None => {
                unmatched.insert(symbol.clone());
            }
        }
    }
    if !unmatched.is_empty() {
        warn!(
            "encoding skipped {} distinct symbol(s) absent from the code table",
            unmatched.len()
        );
    }
    if bits.is_empty() {
        return Err(SfError::EmptyEncodingResult);
    }
    Ok(Encoded { bits, unmatched })
}

/// Encodes `text`, treating every `char` as one symbol.
pub fn encode_text(table: &CodeTable, text: &str) -> Result<Encoded> {
    let symbols: Vec<Symbol> = text.chars().map(Symbol::from).collect();
    encode(table, &symbols)
}

/// Encodes many independent texts against the same table.
///
/// The table is immutable after construction, so with the `rayon`
/// feature enabled the texts are encoded in parallel without any
/// synchronization.
#[cfg(feature = "rayon")]
pub fn encode_batch(table: &CodeTable, texts: &[&str]) -> Vec<Result<Encoded>> {
    use rayon::prelude::*;
    texts
        .par_iter()
        .map(|text| encode_text(table, text))
        .collect()
}

/// Encodes many independent texts against the same table.
#[cfg(not(feature = "rayon"))]
pub fn encode_batch(table: &CodeTable, texts: &[&str]) -> Vec<Result<Encoded>> {
    texts.iter().map(|text| encode_text(table, text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alphabet;

    fn binary_table() -> CodeTable {
        let alphabet = Alphabet::from_pairs([('A', 0.5), ('B', 0.5)]).unwrap();
        CodeTable::build(&alphabet).unwrap()
    }

    #[test]
    fn encodes_matching_text() {
        let table = binary_table();
        let encoded = encode_text(&table, "AAB").unwrap();
        assert_eq!(encoded.bits.to_string(), "001");
        assert!(encoded.is_complete());
    }

    #[test]
    fn skips_unknown_symbols_and_reports_them() {
        let table = binary_table();
        let encoded = encode_text(&table, "AXBX").unwrap();
        assert_eq!(encoded.bits.to_string(), "01");
        assert_eq!(encoded.unmatched.len(), 1);
        assert!(encoded.unmatched.contains(&Symbol::from('X')));
    }

    #[test]
    fn empty_text_is_an_error() {
        let err = encode_text(&binary_table(), "").unwrap_err();
        assert_eq!(err, SfError::EmptyEncodingResult);
    }

    #[test]
    fn fully_unmatched_text_is_an_error() {
        let err = encode_text(&binary_table(), "xyz").unwrap_err();
        assert_eq!(err, SfError::EmptyEncodingResult);
    }

    #[test]
    fn batch_matches_individual_encodes() {
        let table = binary_table();
        let results = encode_batch(&table, &["AB", "BA", ""]);
        assert_eq!(results[0].as_ref().unwrap().bits.to_string(), "01");
        assert_eq!(results[1].as_ref().unwrap().bits.to_string(), "10");
        assert_eq!(
            results[2].as_ref().unwrap_err(),
            &SfError::EmptyEncodingResult
        );
    }
}
