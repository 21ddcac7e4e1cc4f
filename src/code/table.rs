// src/code/table.rs

//! The symbol-to-codeword mapping produced by the builder.

use super::bits::Bits;
use crate::model::Symbol;
use std::collections::HashMap;
use std::fmt;

/// A read-only mapping from [`Symbol`] to its codeword.
///
/// Entries keep the order in which they were supplied (the builder emits
/// them in alphabet insertion order), so two tables built from the same
/// alphabet compare equal entry for entry. Tables built by
/// [`CodeTable::build`](crate::code::CodeTable::build) are prefix-free by
/// construction; tables assembled from raw entries may not be, which is
/// why the decoder re-checks before inverting.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<(Symbol, Bits)>,
    index: HashMap<Symbol, usize>,
}

impl CodeTable {
    /// Assembles a table from explicit entries without validation.
    ///
    /// If a symbol appears more than once, the last entry wins for
    /// lookups — the inconsistency surfaces when the table is used, not
    /// here.
    pub fn from_entries(entries: Vec<(Symbol, Bits)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, (symbol, _)) in entries.iter().enumerate() {
            index.insert(symbol.clone(), i);
        }
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Bits> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index.contains_key(symbol)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Bits)> {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    /// True if no codeword is a prefix of another (distinct entries with
    /// identical codewords also violate this, the empty prefix case).
    pub fn is_prefix_free(&self) -> bool {
        self.prefix_violation().is_none()
    }

    /// First pair `(a, b)` where the codeword of `a` is a prefix of the
    /// codeword of `b`, if any.
    pub(crate) fn prefix_violation(&self) -> Option<(&Symbol, &Symbol)> {
        for (i, (a, code_a)) in self.entries.iter().enumerate() {
            for (b, code_b) in self.entries.iter().skip(i + 1) {
                if code_b.starts_with(code_a) {
                    return Some((a, b));
                }
                if code_a.starts_with(code_b) {
                    return Some((b, a));
                }
            }
        }
        None
    }
}

impl PartialEq for CodeTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CodeTable {}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{}: {}", symbol, code)?;
        }
        Ok(())
    }
}
