// src/metrics.rs

//! Information-theoretic properties of a code.
//!
//! All quantities are in bits per symbol. For any prefix-free code over
//! a valid distribution the noiseless coding theorem puts the average
//! length at or above the entropy, so the redundancy is non-negative up
//! to floating-point noise.

use crate::code::CodeTable;
use crate::model::Alphabet;

/// Tolerance applied to the Kraft-McMillan sum, absorbing accumulated
/// floating-point error in the summation.
pub const KRAFT_TOLERANCE: f64 = 1e-9;

/// The computed properties of a `(alphabet, table)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeProperties {
    /// `L = Σ len(code(s)) · P(s)`.
    pub average_length: f64,
    /// `H = -Σ P(s) · log2(P(s))`, zero-probability terms contributing 0.
    pub entropy: f64,
    /// `R = L - H`.
    pub redundancy: f64,
    /// `Σ 2^(-len(code(s)))` over the table.
    pub kraft_sum: f64,
    /// Whether the Kraft-McMillan inequality holds (sum ≤ 1, within
    /// [`KRAFT_TOLERANCE`]).
    pub kraft_satisfied: bool,
}

impl CodeProperties {
    /// Computes all properties for `table` against the probabilities in
    /// `alphabet`, aligned by symbol. Alphabet symbols missing from the
    /// table contribute no length term.
    pub fn compute(table: &CodeTable, alphabet: &Alphabet) -> CodeProperties {
        let mut average_length = 0.0;
        let mut entropy = 0.0;
        for (symbol, p) in alphabet.iter() {
            if let Some(code) = table.get(symbol) {
                average_length += code.len() as f64 * p;
            }
            if p > 0.0 {
                entropy -= p * p.log2();
            }
        }
        let kraft_sum: f64 = table
            .iter()
            .map(|(_, code)| 2f64.powi(-(code.len() as i32)))
            .sum();
        CodeProperties {
            average_length,
            entropy,
            redundancy: average_length - entropy,
            kraft_sum,
            kraft_satisfied: kraft_sum <= 1.0 + KRAFT_TOLERANCE,
        }
    }
}
