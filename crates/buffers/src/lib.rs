//! Fixed-width big-endian integer layout for CQL numeric wire values.
//!
//! This crate is the leaf layer of the numeric codec: it knows how many bytes
//! a non-null `int` or `smallint` occupies and how a two's-complement integer
//! is laid out in them. It performs no range validation; callers narrow or
//! range-check before handing a value to [`encode_fixed`].
//!
//! # Overview
//!
//! - [`WireWidth`] - The two supported widths (`smallint` = 2, `int` = 4)
//! - [`encode_fixed`] - Truncating big-endian writer
//! - [`decode_fixed`] / [`decode_unsigned`] - Signed and zero-extended readers
//! - [`print_octets`] / [`print_wire`] - Hex formatting for diagnostics
//!
//! # Example
//!
//! ```
//! use cql_buffers::{decode_fixed, encode_fixed, WireWidth};
//!
//! let bytes = encode_fixed(-2, WireWidth::SmallInt);
//! assert_eq!(bytes, vec![0xff, 0xfe]);
//! assert_eq!(decode_fixed(&bytes).unwrap(), -2);
//! ```

mod fixed;
mod print_octets;
mod width;

pub use fixed::{decode_fixed, decode_unsigned, encode_fixed};
pub use print_octets::{print_octets, print_octets_default, print_wire};
pub use width::WireWidth;

/// Error type for fixed-width layout operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The byte slice is neither 2 nor 4 bytes long.
    InvalidLength(usize),
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::InvalidLength(len) => {
                write!(f, "invalid fixed-width length {len}, expected 2 or 4")
            }
        }
    }
}

impl std::error::Error for BufferError {}
