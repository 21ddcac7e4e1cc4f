// src/coding/decoder.rs

//! Decoding a bit sequence back into text.
//!
//! Decoding is incremental prefix matching: accumulate bits into a
//! buffer and emit a symbol the moment the buffer equals a codeword.
//! That is unambiguous exactly when the table is prefix-free, so the
//! table is checked before any bit is consumed — it may have arrived
//! from an untrusted source rather than from this crate's builder.

use crate::code::{Bits, CodeTable};
use crate::model::Symbol;
use crate::utils::error::{Result, SfError};
use std::collections::HashMap;
use std::str::FromStr;

/// Decodes `bits` into the symbol sequence it encodes.
///
/// # Errors
/// * `AmbiguousCodeTable` if the table is not prefix-free (duplicate
///   codewords, or one codeword prefixing another). Detected before any
///   decoding takes place.
/// * `IncompleteTrailingBits` if input remains in the buffer after the
///   last bit without completing a codeword.
pub fn decode(table: &CodeTable, bits: &Bits) -> Result<Vec<Symbol>> {
    let inverse = invert(table)?;
    let mut decoded = Vec::new();
    let mut buffer = Bits::new();
    for bit in bits.iter() {
        buffer.push(bit);
        if let Some(symbol) = inverse.get(&buffer) {
            decoded.push(symbol.clone());
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        return Err(SfError::IncompleteTrailingBits {
            residue: buffer.to_string(),
        });
    }
    Ok(decoded)
}

/// Parses a `'0'`/`'1'` string and decodes it, concatenating the decoded
/// symbols into a `String`.
pub fn decode_str(table: &CodeTable, bits: &str) -> Result<String> {
    let bits = Bits::from_str(bits)?;
    let symbols = decode(table, &bits)?;
    Ok(symbols.iter().map(Symbol::as_str).collect())
}

/// Builds the codeword-to-symbol inverse, refusing any table a prefix
/// decoder could misread.
fn invert(table: &CodeTable) -> Result<HashMap<Bits, Symbol>> {
    if let Some((a, b)) = table.prefix_violation() {
        return Err(SfError::AmbiguousCodeTable(format!(
            "code \"{}\" of symbol '{}' is a prefix of code \"{}\" of symbol '{}'",
            table.get(a).map(|c| c.to_string()).unwrap_or_default(),
            a,
            table.get(b).map(|c| c.to_string()).unwrap_or_default(),
            b
        )));
    }
    let mut inverse = HashMap::with_capacity(table.len());
    for (symbol, code) in table.iter() {
        inverse.insert(code.clone(), symbol.clone());
    }
    Ok(inverse)
}
