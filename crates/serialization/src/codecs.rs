//! Codec objects addressed by wire width, for callers that already know the
//! width at runtime.

use cql_buffers::WireWidth;

use crate::{cqlint, smallint, Result, Value};

/// A numeric wire codec bound to one wire width.
pub trait NumericCodec {
    fn id(&self) -> &'static str;
    fn width(&self) -> WireWidth;
    fn encode(&self, value: &Value) -> Result<Option<Vec<u8>>>;
    fn decode(&self, p: Option<&[u8]>, target: Option<&mut Value>) -> Result<()>;
}

/// Codec for the 4-byte `int` type.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntCodec;

impl NumericCodec for IntCodec {
    fn id(&self) -> &'static str {
        "int"
    }

    fn width(&self) -> WireWidth {
        cqlint::WIRE
    }

    fn encode(&self, value: &Value) -> Result<Option<Vec<u8>>> {
        cqlint::marshal_value(value)
    }

    fn decode(&self, p: Option<&[u8]>, target: Option<&mut Value>) -> Result<()> {
        cqlint::unmarshal_value(p, target)
    }
}

/// Codec for the 2-byte `smallint` type.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmallIntCodec;

impl NumericCodec for SmallIntCodec {
    fn id(&self) -> &'static str {
        "smallint"
    }

    fn width(&self) -> WireWidth {
        smallint::WIRE
    }

    fn encode(&self, value: &Value) -> Result<Option<Vec<u8>>> {
        smallint::marshal_value(value)
    }

    fn decode(&self, p: Option<&[u8]>, target: Option<&mut Value>) -> Result<()> {
        smallint::unmarshal_value(p, target)
    }
}

/// Aggregate codec holder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codecs {
    pub int: IntCodec,
    pub smallint: SmallIntCodec,
}

impl Codecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The codec for a wire width.
    pub fn by_width(&self, width: WireWidth) -> &dyn NumericCodec {
        match width {
            WireWidth::Int => &self.int,
            WireWidth::SmallInt => &self.smallint,
        }
    }
}
