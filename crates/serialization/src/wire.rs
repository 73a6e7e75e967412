//! Length validation and narrowing shared by both wire modules.

use cql_buffers::{decode_fixed, decode_unsigned, WireWidth};

use crate::value::{NativeShape, Shape};
use crate::{CodecError, Op, Result};

/// Returns the full-width bytes of `p`, or `None` for a null or empty value.
///
/// Any length other than 0 or the wire width is rejected; the error names
/// `shape` as the target.
#[inline]
pub(crate) fn present(p: Option<&[u8]>, wire: WireWidth, shape: Shape) -> Result<Option<&[u8]>> {
    match p {
        None | Some([]) => Ok(None),
        Some(bytes) if bytes.len() == wire.size() => Ok(Some(bytes)),
        Some(bytes) => Err(CodecError::invalid_length(wire, shape, bytes.len())),
    }
}

/// Decodes the signed wire value for a `T` target; null and empty decode to
/// zero.
#[inline]
pub(crate) fn signed<T: NativeShape>(p: Option<&[u8]>, wire: WireWidth) -> Result<i32> {
    match present(p, wire, T::SHAPE)? {
        Some(bytes) => decode_fixed(bytes)
            .map_err(|_| CodecError::invalid_length(wire, T::SHAPE, bytes.len())),
        None => Ok(0),
    }
}

/// Decodes the wire bits as an unsigned number for a `T` target; null and
/// empty decode to zero.
#[inline]
pub(crate) fn unsigned<T: NativeShape>(p: Option<&[u8]>, wire: WireWidth) -> Result<u32> {
    match present(p, wire, T::SHAPE)? {
        Some(bytes) => decode_unsigned(bytes)
            .map_err(|_| CodecError::invalid_length(wire, T::SHAPE, bytes.len())),
        None => Ok(0),
    }
}

/// Decimal text of the wire value.
///
/// Absent decodes to `""` and present-but-empty to `"0"`.
pub(crate) fn text<T: NativeShape>(p: Option<&[u8]>, wire: WireWidth) -> Result<String> {
    match p {
        None => Ok(String::new()),
        Some(_) => Ok(signed::<T>(p, wire)?.to_string()),
    }
}

/// Narrows a decoded signed value into `T`, rejecting values outside its range.
#[inline]
pub(crate) fn narrow_signed<T>(val: i32, wire: WireWidth) -> Result<T>
where
    T: TryFrom<i32> + NativeShape,
{
    T::try_from(val).map_err(|_| CodecError::overflow(Op::Unmarshal, wire, T::SHAPE, val))
}

/// Narrows decoded unsigned bits into `T`.
///
/// The error reports the signed wire value, which is what the peer sent.
#[inline]
pub(crate) fn narrow_unsigned<T>(raw: u32, wire: WireWidth) -> Result<T>
where
    T: TryFrom<u32> + NativeShape,
{
    T::try_from(raw).map_err(|_| {
        let sent = if wire == WireWidth::SmallInt {
            raw as u16 as i16 as i32
        } else {
            raw as i32
        };
        CodecError::overflow(Op::Unmarshal, wire, T::SHAPE, sent)
    })
}
