//! A Rust library for Shannon-Fano prefix coding.
//!
//! Given an alphabet of symbols with known occurrence probabilities,
//! this crate builds a binary prefix-free code by recursive top-down
//! probability partitioning, encodes and decodes text against that
//! code, and computes information-theoretic properties of the result
//! (entropy, average code length, redundancy, the Kraft-McMillan
//! inequality).
//!
//! # Quick Start
//!
//! ```
//! use shannon_fano::{Alphabet, ShannonFanoCodec};
//!
//! let alphabet = Alphabet::parse("A,B,C,D", "0.4,0.3,0.2,0.1")?;
//! let codec = ShannonFanoCodec::new(alphabet)?;
//!
//! let encoded = codec.encode_text("ABAD")?;
//! assert_eq!(encoded.bits.to_string(), "0100111");
//! assert_eq!(codec.decode_str("0100111")?, "ABAD");
//!
//! let props = codec.properties();
//! assert!(props.kraft_satisfied);
//! assert!(props.redundancy >= 0.0);
//! # Ok::<(), shannon_fano::SfError>(())
//! ```
//!
//! The building blocks are also usable directly: [`Alphabet`] validates
//! the probability model, [`CodeTable::build`] runs the partitioning
//! algorithm, and the [`coding`] and [`metrics`] modules operate on the
//! resulting table through a shared reference.
//!
//! # Notes
//!
//! - Construction is deterministic: the probability sort is stable and
//!   split ties take the smallest index, so the same alphabet always
//!   yields the same table.
//! - Shannon-Fano codes are valid prefix codes but not always optimal;
//!   matching Huffman's average length is out of scope.
//! - Everything is a pure computation over immutable values. With the
//!   `rayon` feature, [`coding::encode_batch`] encodes independent
//!   texts in parallel against one shared table.

// Core modules
pub mod code;
pub mod codec;
pub mod coding;
pub mod metrics;
pub mod model;
pub mod utils;

// Primary API
pub use code::{Bits, CodeTable};
pub use codec::ShannonFanoCodec;
pub use coding::{decode, decode_str, encode, encode_batch, encode_text, Encoded};
pub use metrics::CodeProperties;
pub use model::{Alphabet, Symbol};

// Error types
pub use utils::error::{Result, SfError};

pub const SHANNON_FANO_VERSION: &str = "0.3.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(SHANNON_FANO_VERSION, "0.3.0");
    }

    #[test]
    fn test_public_api_flow() {
        let alphabet = Alphabet::parse("A,B", "0.5,0.5").unwrap();
        let table = CodeTable::build(&alphabet).unwrap();
        let encoded = encode_text(&table, "AB").unwrap();
        assert_eq!(decode_str(&table, &encoded.bits.to_string()).unwrap(), "AB");
    }
}
