//! `smallint` wire bytes to native values.

#[cfg(feature = "bigint")]
use malachite::Integer;

use super::WIRE;
use crate::wire;
use crate::Result;

/// Decodes a `smallint` wire value into a native value.
pub trait SmallIntUnmarshal: Sized {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self>;
}

/// Decodes a `smallint` wire value.
pub fn unmarshal<T: SmallIntUnmarshal>(p: Option<&[u8]>) -> Result<T> {
    T::unmarshal_smallint(p)
}

/// Decodes a `smallint` wire value into `v`.
///
/// On error `v` is left unchanged.
pub fn unmarshal_into<T: SmallIntUnmarshal>(p: Option<&[u8]>, v: &mut T) -> Result<()> {
    *v = T::unmarshal_smallint(p)?;
    Ok(())
}

impl SmallIntUnmarshal for i8 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

impl SmallIntUnmarshal for i16 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

impl SmallIntUnmarshal for i32 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE)
    }
}

impl SmallIntUnmarshal for i64 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE).map(i64::from)
    }
}

impl SmallIntUnmarshal for isize {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_signed(wire::signed::<Self>(p, WIRE)?, WIRE)
    }
}

/// The high byte must be zero.
impl SmallIntUnmarshal for u8 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

impl SmallIntUnmarshal for u16 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

impl SmallIntUnmarshal for u32 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::unsigned::<Self>(p, WIRE)
    }
}

impl SmallIntUnmarshal for u64 {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::unsigned::<Self>(p, WIRE).map(u64::from)
    }
}

impl SmallIntUnmarshal for usize {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::narrow_unsigned(wire::unsigned::<Self>(p, WIRE)?, WIRE)
    }
}

#[cfg(feature = "bigint")]
impl SmallIntUnmarshal for Integer {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::signed::<Self>(p, WIRE).map(Integer::from)
    }
}

impl SmallIntUnmarshal for String {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        wire::text::<Self>(p, WIRE)
    }
}

impl<T: SmallIntUnmarshal> SmallIntUnmarshal for Option<T> {
    fn unmarshal_smallint(p: Option<&[u8]>) -> Result<Self> {
        match p {
            Some(_) => T::unmarshal_smallint(p).map(Some),
            None => Ok(None),
        }
    }
}
