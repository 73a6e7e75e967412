//! The 4-byte `int` wire type.
//!
//! A non-null value is a big-endian two's-complement `i32`; zero bytes is
//! null.

mod dispatch;
mod marshal;
mod unmarshal;

pub use dispatch::{marshal_value, unmarshal_value};
pub use marshal::{marshal, IntMarshal};
pub use unmarshal::{unmarshal, unmarshal_into, IntUnmarshal};

use cql_buffers::WireWidth;

pub(crate) const WIRE: WireWidth = WireWidth::Int;
