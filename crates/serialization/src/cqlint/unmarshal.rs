//! `int` wire bytes to native values.
//!
//! Empty input decodes to the target's zero value. Signed targets narrower
//! than 32 bits are range-checked; unsigned targets read the raw 32 bits and
//! the narrow ones require the high bytes to be zero.

#[cfg(feature = "bigint")]
use malachite::Integer;

use super::WIRE;
use crate::wire;
use crate::Result;

/// Decodes an `int` wire value into a native value.
pub trait IntUnmarshal: Sized {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self>;
}

/// Decodes an `int` wire value.
pub fn unmarshal<T: IntUnmarshal>(p: Option<&[u8]>) -> Result<T> {
    T::unmarshal_int(p)
}

/// Decodes an `int` wire value into `v`.
///
/// On error `v` is left unchanged.
pub fn unmarshal_into<T: IntUnmarshal>(p: Option<&[u8]>, v: &mut T) -> Result<()> {
    *v = T::unmarshal_int(p)?;
    Ok(())
}

impl IntUnmarshal for i8 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

impl IntUnmarshal for i16 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

impl IntUnmarshal for i32 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE)
    }
}

impl IntUnmarshal for i64 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE).map(i64::from)
    }
}

impl IntUnmarshal for isize {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

impl IntUnmarshal for u8 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

impl IntUnmarshal for u16 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

impl IntUnmarshal for u32 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::unsigned::<Self>(p, WIRE)
    }
}

impl IntUnmarshal for u64 {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::unsigned::<Self>(p, WIRE).map(u64::from)
    }
}

impl IntUnmarshal for usize {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

#[cfg(feature = "bigint")]
impl IntUnmarshal for Integer {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE).map(Integer::from)
    }
}

/// Null decodes to `""`, present-but-empty to `"0"`.
impl IntUnmarshal for String {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        wire::text::<Self>(p, WIRE)
    }
}

impl<T: IntUnmarshal> IntUnmarshal for Option<T> {
    fn unmarshal_int(p: Option<&[u8]>) -> Result<Self> {
        match p {
            Some(_) => T::unmarshal_int(p).map(Some),
            None => Ok(None),
        }
    }
}
