//! Native values to `int` wire bytes.

use cql_buffers::encode_fixed;
#[cfg(feature = "bigint")]
use malachite::Integer;

use super::WIRE;
use crate::value::Shape;
use crate::{CodecError, Op, Result};

/// Encodes a native value as an `int` wire value.
///
/// `Ok(None)` is the null wire value.
pub trait IntMarshal {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>>;
}

/// Encodes `v` as an `int` wire value.
pub fn marshal<T: IntMarshal + ?Sized>(v: &T) -> Result<Option<Vec<u8>>> {
    v.marshal_int()
}

#[inline]
fn fits(value: i64) -> Result<Option<Vec<u8>>> {
    Ok(Some(encode_fixed(value, WIRE)))
}

#[inline]
fn checked(value: i64, shape: Shape) -> Result<Option<Vec<u8>>> {
    if !WIRE.contains(value) {
        return Err(CodecError::overflow(Op::Marshal, WIRE, shape, value));
    }
    fits(value)
}

#[inline]
fn checked_unsigned(value: u64, shape: Shape) -> Result<Option<Vec<u8>>> {
    if value > WIRE.unsigned_max() {
        return Err(CodecError::overflow(Op::Marshal, WIRE, shape, value));
    }
    fits(value as i64)
}

impl IntMarshal for i8 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

impl IntMarshal for i16 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

impl IntMarshal for i32 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

impl IntMarshal for i64 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        checked(*self, Shape::Int64)
    }
}

impl IntMarshal for isize {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        checked(*self as i64, Shape::Int)
    }
}

impl IntMarshal for u8 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

impl IntMarshal for u16 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

/// Written as raw bits: values above `i32::MAX` arrive as negative ints.
impl IntMarshal for u32 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        fits(i64::from(*self))
    }
}

impl IntMarshal for u64 {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        checked_unsigned(*self, Shape::Uint64)
    }
}

impl IntMarshal for usize {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        checked_unsigned(*self as u64, Shape::Uint)
    }
}

#[cfg(feature = "bigint")]
impl IntMarshal for Integer {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        let n = i32::try_from(self)
            .map_err(|_| CodecError::overflow(Op::Marshal, WIRE, Shape::BigInt, self))?;
        fits(i64::from(n))
    }
}

/// An empty string is the null wire value.
impl IntMarshal for str {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        if self.is_empty() {
            return Ok(None);
        }
        let n: i32 = self.parse().map_err(|source| CodecError::ParseFailure {
            wire: WIRE,
            input: self.to_owned(),
            source,
        })?;
        fits(i64::from(n))
    }
}

impl IntMarshal for String {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        self.as_str().marshal_int()
    }
}

impl<T: IntMarshal + ?Sized> IntMarshal for &T {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        (**self).marshal_int()
    }
}

impl<T: IntMarshal> IntMarshal for Option<T> {
    fn marshal_int(&self) -> Result<Option<Vec<u8>>> {
        match self {
            Some(v) => v.marshal_int(),
            None => Ok(None),
        }
    }
}
