//! Error type for numeric wire conversions.

use std::fmt;
use std::num::ParseIntError;

use cql_buffers::WireWidth;
use thiserror::Error;

use crate::value::Shape;

/// Direction of a conversion, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Native value to wire bytes.
    Marshal,
    /// Wire bytes to native value.
    Unmarshal,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Marshal => "marshal",
            Op::Unmarshal => "unmarshal",
        })
    }
}

/// Errors that can occur while converting a single numeric value.
///
/// None of these are retryable: they describe malformed wire input or a
/// type/range mismatch at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The wire value is neither empty nor exactly the wire width.
    #[error(
        "failed to unmarshal {wire} into {shape}: the length of the data should be 0 or {expected}, got {len}"
    )]
    InvalidLength {
        /// Wire type being decoded.
        wire: WireWidth,
        /// Native shape of the target.
        shape: Shape,
        /// Required length of a non-null value.
        expected: usize,
        /// Length that was received.
        len: usize,
    },

    /// A decode was handed no destination.
    #[error("failed to unmarshal {wire}: can not unmarshal into nil reference")]
    NullTarget {
        /// Wire type being decoded.
        wire: WireWidth,
    },

    /// The value does not fit the destination's range.
    #[error("failed to {op} {wire}: value {value} out of range for {shape}")]
    RangeOverflow {
        /// Direction of the failed conversion.
        op: Op,
        /// Wire type on the other side of the conversion.
        wire: WireWidth,
        /// Native shape of the source (marshal) or target (unmarshal).
        shape: Shape,
        /// Offending value in decimal form.
        value: String,
    },

    /// The runtime shape is not an integer or integer-valued string.
    #[error("failed to {op} {wire}: unsupported value type {shape}")]
    UnsupportedShape {
        /// Direction of the failed conversion.
        op: Op,
        /// Wire type on the other side of the conversion.
        wire: WireWidth,
        /// Offending runtime shape.
        shape: Shape,
    },

    /// A string source is not a base-10 integer within the wire range.
    #[error("failed to marshal {wire}: can not marshal {input:?}: {source}")]
    ParseFailure {
        /// Wire type being encoded.
        wire: WireWidth,
        /// The rejected text.
        input: String,
        /// Underlying parse error.
        #[source]
        source: ParseIntError,
    },
}

impl CodecError {
    pub(crate) fn invalid_length(wire: WireWidth, shape: Shape, len: usize) -> Self {
        CodecError::InvalidLength {
            wire,
            shape,
            expected: wire.size(),
            len,
        }
    }

    pub(crate) fn overflow(
        op: Op,
        wire: WireWidth,
        shape: Shape,
        value: impl fmt::Display,
    ) -> Self {
        CodecError::RangeOverflow {
            op,
            wire,
            shape,
            value: value.to_string(),
        }
    }

    pub(crate) fn unsupported(op: Op, wire: WireWidth, shape: Shape) -> Self {
        CodecError::UnsupportedShape { op, wire, shape }
    }

    /// Wire type the failed conversion was targeting.
    pub fn wire(&self) -> WireWidth {
        match self {
            CodecError::InvalidLength { wire, .. }
            | CodecError::NullTarget { wire }
            | CodecError::RangeOverflow { wire, .. }
            | CodecError::UnsupportedShape { wire, .. }
            | CodecError::ParseFailure { wire, .. } => *wire,
        }
    }

    /// Direction of the failed conversion.
    pub fn op(&self) -> Op {
        match self {
            CodecError::InvalidLength { .. } | CodecError::NullTarget { .. } => Op::Unmarshal,
            CodecError::ParseFailure { .. } => Op::Marshal,
            CodecError::RangeOverflow { op, .. } | CodecError::UnsupportedShape { op, .. } => *op,
        }
    }
}
