// src/code/builder.rs

//! Shannon-Fano code construction.
//!
//! The builder is a recursive top-down partition: sort the symbols by
//! probability (descending, stable), split where the two halves' masses
//! are closest, prefix the left half with `0` and the right half with
//! `1`, recurse. The result is prefix-free by construction, since each
//! recursion only ever appends bits under disjoint branches.
//!
//! Split convention: the split position is found by a single left-to-right
//! cumulative scan with a strict `<` comparison, so among equal
//! differences the smallest index wins. Together with the stable sort
//! this makes table construction fully deterministic.

use super::bits::Bits;
use super::table::CodeTable;
use crate::model::{Alphabet, Symbol};
use crate::utils::error::{Result, SfError};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::HashMap;

impl CodeTable {
    /// Builds the Shannon-Fano code table for `alphabet`.
    ///
    /// A single-symbol alphabet gets the empty codeword; every other
    /// symbol receives at least one bit. Entries come out in alphabet
    /// insertion order.
    ///
    /// # Errors
    /// `InvalidAlphabet` if the alphabet holds no symbols. (A validated
    /// [`Alphabet`] is never empty; the guard protects tables built
    /// around values from other sources.)
    pub fn build(alphabet: &Alphabet) -> Result<CodeTable> {
        if alphabet.is_empty() {
            return Err(SfError::InvalidAlphabet(
                "cannot build a code table for an empty alphabet".to_string(),
            ));
        }

        let mut ranked: Vec<(&Symbol, f64)> = alphabet.iter().collect();
        // Stable: equal probabilities keep their insertion order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut codes = HashMap::with_capacity(ranked.len());
        assign(&ranked, Bits::new(), &mut codes);

        // Re-emit in alphabet insertion order so equal alphabets yield
        // identical tables. `remove` collapses duplicate symbols to a
        // single entry.
        let mut entries = Vec::with_capacity(codes.len());
        for (symbol, _) in alphabet.iter() {
            if let Some(code) = codes.remove(symbol) {
                entries.push((symbol.clone(), code));
            }
        }
        Ok(CodeTable::from_entries(entries))
    }
}

/// Assigns codewords to every symbol of the (already sorted) `ranked`
/// slice, descending recursively with `prefix` accumulated so far.
fn assign(ranked: &[(&Symbol, f64)], prefix: Bits, codes: &mut HashMap<Symbol, Bits>) {
    if let [(symbol, _)] = ranked {
        trace!("leaf: '{}' -> \"{}\"", symbol, prefix);
        codes.insert((*symbol).clone(), prefix);
        return;
    }
    let split = split_point(ranked);
    debug!(
        "partition of {} symbols splits {}/{}",
        ranked.len(),
        split,
        ranked.len() - split
    );
    assign(&ranked[..split], prefix.child(false), codes);
    assign(&ranked[split..], prefix.child(true), codes);
}

/// Scans candidate split positions 1..n-1 and returns the one whose
/// left/right mass difference is smallest; the first minimizer wins.
fn split_point(ranked: &[(&Symbol, f64)]) -> usize {
    let total: f64 = ranked.iter().map(|(_, p)| p).sum();
    let mut cumulative = 0.0;
    let mut best = 1;
    let mut min_diff = f64::INFINITY;
    for (i, (_, p)) in ranked.iter().enumerate().take(ranked.len() - 1) {
        cumulative += p;
        let diff = (cumulative - (total - cumulative)).abs();
        if diff < min_diff {
            min_diff = diff;
            best = i + 1;
        }
    }
    best
}
