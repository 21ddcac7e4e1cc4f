// src/codec.rs

//! High-level facade: build the code once, then encode, decode, and
//! inspect against the held table.
//!
//! The alphabet and table are fixed at construction. Replacing the code
//! means constructing a new codec, which keeps every outstanding
//! reference to the previous table valid and unchanged.

use crate::code::CodeTable;
use crate::coding::{decode_str, encode_text, Encoded};
use crate::metrics::CodeProperties;
use crate::model::Alphabet;
use crate::utils::error::Result;

/// An immutable alphabet + code table pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ShannonFanoCodec {
    alphabet: Alphabet,
    table: CodeTable,
}

impl ShannonFanoCodec {
    /// Builds the code table for `alphabet` and wraps both.
    pub fn new(alphabet: Alphabet) -> Result<Self> {
        let table = CodeTable::build(&alphabet)?;
        Ok(Self { alphabet, table })
    }

    /// Parses comma-separated symbol and probability strings and builds
    /// the codec in one step.
    pub fn from_strings(raw_symbols: &str, raw_probabilities: &str) -> Result<Self> {
        Self::new(Alphabet::parse(raw_symbols, raw_probabilities)?)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// See [`encode_text`](crate::coding::encode_text).
    pub fn encode_text(&self, text: &str) -> Result<Encoded> {
        encode_text(&self.table, text)
    }

    /// See [`decode_str`](crate::coding::decode_str).
    pub fn decode_str(&self, bits: &str) -> Result<String> {
        decode_str(&self.table, bits)
    }

    /// Computes the information-theoretic properties of the held code.
    pub fn properties(&self) -> CodeProperties {
        CodeProperties::compute(&self.table, &self.alphabet)
    }
}
