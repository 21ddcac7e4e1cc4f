// src/code/bits.rs

//! A finite sequence of bits.
//!
//! [`Bits`] serves two roles: the per-symbol codeword inside a
//! [`CodeTable`](super::CodeTable) and the encoded output sequence. The
//! textual form is a string of `'0'`/`'1'` characters, which is what the
//! input layer exchanges with the core.

use crate::utils::error::{Result, SfError};
use bitvec::order::Msb0;
use bitvec::vec::BitVec;
use std::fmt;
use std::str::FromStr;

/// A packed 0/1 sequence. May be empty (the codeword of a single-symbol
/// alphabet has length zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits(BitVec<u8, Msb0>);

impl Bits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Appends all of `other` to the end of `self`.
    pub fn extend(&mut self, other: &Bits) {
        self.0.extend_from_bitslice(&other.0);
    }

    /// This sequence followed by one more bit. Used by the table builder
    /// to descend into the 0 (left) or 1 (right) branch.
    pub fn child(&self, bit: bool) -> Bits {
        let mut next = self.clone();
        next.push(bit);
        next
    }

    /// True if `prefix` matches the start of this sequence. An empty
    /// prefix matches everything.
    pub fn starts_with(&self, prefix: &Bits) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bits {
    type Err = SfError;

    /// Parses a `'0'`/`'1'` string, rejecting any other character.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = Bits::new();
        for (position, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(SfError::InvalidBit { position, found }),
            }
        }
        Ok(bits)
    }
}
