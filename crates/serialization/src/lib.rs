//! Range-checked codecs between native integers and the CQL `int` and
//! `smallint` wire types.
//!
//! Each wire type has its own module with two typed traits and a dynamic
//! dispatch entry point:
//!
//! | Module | Wire width | Typed traits | Dynamic entry points |
//! |--------|-----------|--------------|----------------------|
//! | [`cqlint`] | 4 bytes | [`cqlint::IntMarshal`], [`cqlint::IntUnmarshal`] | [`cqlint::marshal_value`], [`cqlint::unmarshal_value`] |
//! | [`smallint`] | 2 bytes | [`smallint::SmallIntMarshal`], [`smallint::SmallIntUnmarshal`] | [`smallint::marshal_value`], [`smallint::unmarshal_value`] |
//!
//! Wire input is three-state: `None` is null, `Some(&[])` is present but
//! empty, anything else must be exactly the wire width. Encoders return
//! `Ok(None)` for the null wire value.
//!
//! No value is ever silently truncated: a native value that does not fit the
//! wire width, or a wire value that does not fit the native target, is a
//! [`CodecError::RangeOverflow`].
//!
//! # Example
//!
//! ```
//! use cql_serialization::{cqlint, smallint, CodecError};
//!
//! assert_eq!(smallint::marshal(&32767i32).unwrap(), Some(vec![0x7f, 0xff]));
//! assert!(matches!(
//!     smallint::marshal(&32768i32),
//!     Err(CodecError::RangeOverflow { .. })
//! ));
//!
//! let n: i8 = cqlint::unmarshal(Some(&[0, 0, 0, 100])).unwrap();
//! assert_eq!(n, 100);
//!
//! let absent: Option<String> = cqlint::unmarshal(None).unwrap();
//! assert_eq!(absent, None);
//! ```

#[macro_use]
mod dispatch;

mod codecs;
mod error;
mod value;
mod wire;

pub mod cqlint;
pub mod smallint;

pub use codecs::{Codecs, IntCodec, NumericCodec, SmallIntCodec};
pub use cql_buffers::WireWidth;
pub use error::{CodecError, Op};
pub use value::{NativeShape, Nullable, Shape, Value};

#[cfg(feature = "bigint")]
pub use malachite::Integer;

/// Convenience type alias for Results with [`CodecError`].
pub type Result<T> = std::result::Result<T, CodecError>;
