// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Shannon-Fano library.
///
/// Every failure is a recoverable, reportable outcome: a failed operation
/// never leaves partial state behind (a failed table build produces no
/// table, a failed decode produces no text).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SfError {
    /// The alphabet is empty, or the symbol and probability counts differ.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A probability is outside (0, 1], unparseable, or the set does not
    /// sum to 1 within tolerance.
    #[error("Invalid probabilities: {0}")]
    InvalidProbabilities(String),

    /// The code table cannot be unambiguously inverted for decoding
    /// (duplicate codes, or one code is a prefix of another).
    #[error("Ambiguous code table: {0}")]
    AmbiguousCodeTable(String),

    /// Decoding consumed all input but the trailing bits complete no code.
    #[error("Incomplete trailing bits: \"{residue}\" does not complete any code")]
    IncompleteTrailingBits { residue: String },

    /// Encoding produced an empty output sequence.
    #[error("Encoding produced no output: no bits were emitted for the input")]
    EmptyEncodingResult,

    /// A bit-string input contained a character other than '0' or '1'.
    #[error("Invalid bit character '{found}' at position {position}")]
    InvalidBit { position: usize, found: char },
}

/// A specialized `Result` type for Shannon-Fano operations.
pub type Result<T> = std::result::Result<T, SfError>;
