//! The probability model: validated symbol/probability associations and
//! the comma-separated boundary parser.

pub mod alphabet;
mod parse;

pub use alphabet::{Alphabet, Symbol, PROBABILITY_SUM_TOLERANCE};
