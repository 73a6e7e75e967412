//! The 2-byte `smallint` wire type.
//!
//! A non-null value is a big-endian two's-complement `i16`; zero bytes is
//! null.

mod dispatch;
mod marshal;
mod unmarshal;

pub use dispatch::{marshal_value, unmarshal_value};
pub use marshal::{marshal, SmallIntMarshal};
pub use unmarshal::{unmarshal, unmarshal_into, SmallIntUnmarshal};

use cql_buffers::WireWidth;

pub(crate) const WIRE: WireWidth = WireWidth::SmallInt;
