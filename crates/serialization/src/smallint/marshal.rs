//! Native values to `smallint` wire bytes.
//!
//! Sources wider than 16 bits are range-checked before truncation. `u16` is
//! written as raw bits without a check, so values above `i16::MAX` arrive
//! as negative smallints; `u32`, `u64` and `usize` are checked against
//! `[0, 65535]`, not the signed range.

use cql_buffers::encode_fixed;
#[cfg(feature = "bigint")]
use malachite::Integer;

use super::WIRE;
use crate::value::Shape;
use crate::{CodecError, Op, Result};

/// Encodes a native value as a `smallint` wire value.
///
/// `Ok(None)` is the null wire value.
pub trait SmallIntMarshal {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>>;
}

/// Encodes `v` as a `smallint` wire value.
pub fn marshal<T: SmallIntMarshal + ?Sized>(v: &T) -> Result<Option<Vec<u8>>> {
    v.marshal_smallint()
}

#[inline]
fn checked(value: i64, shape: Shape) -> Result<Option<Vec<u8>>> {
    if !WIRE.contains(value) {
        return Err(CodecError::overflow(Op::Marshal, WIRE, shape, value));
    }
    Ok(Some(encode_fixed(value, WIRE)))
}

#[inline]
fn checked_unsigned(value: u64, shape: Shape) -> Result<Option<Vec<u8>>> {
    if value > WIRE.unsigned_max() {
        return Err(CodecError::overflow(Op::Marshal, WIRE, shape, value));
    }
    Ok(Some(encode_fixed(value as i64, WIRE)))
}

impl SmallIntMarshal for i8 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        let high = if *self < 0 { 0xff } else { 0x00 };
        Ok(Some(vec![high, *self as u8]))
    }
}

impl SmallIntMarshal for i16 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        Ok(Some(self.to_be_bytes().to_vec()))
    }
}

impl SmallIntMarshal for i32 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked(i64::from(*self), Shape::Int32)
    }
}

impl SmallIntMarshal for i64 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked(*self, Shape::Int64)
    }
}

impl SmallIntMarshal for isize {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked(*self as i64, Shape::Int)
    }
}

impl SmallIntMarshal for u8 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        Ok(Some(vec![0x00, *self]))
    }
}

impl SmallIntMarshal for u16 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        Ok(Some(self.to_be_bytes().to_vec()))
    }
}

impl SmallIntMarshal for u32 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked_unsigned(u64::from(*self), Shape::Uint32)
    }
}

impl SmallIntMarshal for u64 {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked_unsigned(*self, Shape::Uint64)
    }
}

impl SmallIntMarshal for usize {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        checked_unsigned(*self as u64, Shape::Uint)
    }
}

#[cfg(feature = "bigint")]
impl SmallIntMarshal for Integer {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        let n = i16::try_from(self)
            .map_err(|_| CodecError::overflow(Op::Marshal, WIRE, Shape::BigInt, self))?;
        Ok(Some(encode_fixed(i64::from(n), WIRE)))
    }
}

/// An empty string is the null wire value.
impl SmallIntMarshal for str {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        if self.is_empty() {
            return Ok(None);
        }
        let n: i16 = self.parse().map_err(|source| CodecError::ParseFailure {
            wire: WIRE,
            input: self.to_owned(),
            source,
        })?;
        Ok(Some(encode_fixed(i64::from(n), WIRE)))
    }
}

impl SmallIntMarshal for String {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        self.as_str().marshal_smallint()
    }
}

impl<T: SmallIntMarshal + ?Sized> SmallIntMarshal for &T {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        (**self).marshal_smallint()
    }
}

impl<T: SmallIntMarshal> SmallIntMarshal for Option<T> {
    fn marshal_smallint(&self) -> Result<Option<Vec<u8>>> {
        match self {
            Some(v) => v.marshal_smallint(),
            None => Ok(None),
        }
    }
}
