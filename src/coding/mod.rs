//! Encoding and decoding against a built code table.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode, decode_str};
pub use encoder::{encode, encode_batch, encode_text, Encoded};
