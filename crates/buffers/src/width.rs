//! Wire widths of the fixed-size numeric types.

use std::fmt;

/// Byte width of a non-null numeric wire value.
///
/// A wire value is either empty (null) or exactly [`WireWidth::size`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireWidth {
    /// `smallint`: 2-byte signed integer.
    SmallInt,
    /// `int`: 4-byte signed integer.
    Int,
}

impl WireWidth {
    /// Number of bytes in a non-null value.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            WireWidth::SmallInt => 2,
            WireWidth::Int => 4,
        }
    }

    /// Protocol name of the wire type.
    pub const fn name(self) -> &'static str {
        match self {
            WireWidth::SmallInt => "smallint",
            WireWidth::Int => "int",
        }
    }

    /// Smallest signed value representable on the wire.
    pub const fn min(self) -> i64 {
        match self {
            WireWidth::SmallInt => i16::MIN as i64,
            WireWidth::Int => i32::MIN as i64,
        }
    }

    /// Largest signed value representable on the wire.
    pub const fn max(self) -> i64 {
        match self {
            WireWidth::SmallInt => i16::MAX as i64,
            WireWidth::Int => i32::MAX as i64,
        }
    }

    /// Largest value that fits the width's bits when read as unsigned.
    pub const fn unsigned_max(self) -> u64 {
        match self {
            WireWidth::SmallInt => u16::MAX as u64,
            WireWidth::Int => u32::MAX as u64,
        }
    }

    /// Returns `true` if `value` lies in the signed range of this width.
    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl fmt::Display for WireWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
