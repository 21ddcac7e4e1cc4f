//! Codewords and the code table builder.

pub mod bits;
mod builder;
pub mod table;

pub use bits::Bits;
pub use table::CodeTable;
