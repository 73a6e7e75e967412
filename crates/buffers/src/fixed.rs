//! Truncating big-endian writer and fixed-width readers.

use crate::{BufferError, WireWidth};

/// Writes `value` as `width` big-endian bytes.
///
/// The two's-complement representation is truncated to `width * 8` bits.
/// This never fails; range validation belongs to the caller.
///
/// ```
/// use cql_buffers::{encode_fixed, WireWidth};
///
/// assert_eq!(encode_fixed(0x0102_0304, WireWidth::Int), vec![1, 2, 3, 4]);
/// assert_eq!(encode_fixed(0x0102_0304, WireWidth::SmallInt), vec![3, 4]);
/// assert_eq!(encode_fixed(-1, WireWidth::Int), vec![0xff; 4]);
/// ```
#[inline]
pub fn encode_fixed(value: i64, width: WireWidth) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    bytes[bytes.len() - width.size()..].to_vec()
}

/// Reads a big-endian two's-complement integer of 2 or 4 bytes.
///
/// A 2-byte input is reassembled as `i16` and sign-extended.
///
/// ```
/// use cql_buffers::decode_fixed;
///
/// assert_eq!(decode_fixed(&[0xff, 0xff, 0xff, 0x9c]).unwrap(), -100);
/// assert_eq!(decode_fixed(&[0x80, 0x00]).unwrap(), -32768);
/// assert!(decode_fixed(&[0x00]).is_err());
/// ```
#[inline]
pub fn decode_fixed(bytes: &[u8]) -> Result<i32, BufferError> {
    match *bytes {
        [a, b, c, d] => Ok(i32::from_be_bytes([a, b, c, d])),
        [a, b] => Ok(i16::from_be_bytes([a, b]) as i32),
        _ => Err(BufferError::InvalidLength(bytes.len())),
    }
}

/// Reads a big-endian integer of 2 or 4 bytes without sign extension.
///
/// ```
/// use cql_buffers::decode_unsigned;
///
/// assert_eq!(decode_unsigned(&[0xff, 0xff]).unwrap(), 65535);
/// assert_eq!(decode_unsigned(&[0xff, 0xff, 0xff, 0xff]).unwrap(), u32::MAX);
/// ```
#[inline]
pub fn decode_unsigned(bytes: &[u8]) -> Result<u32, BufferError> {
    match *bytes {
        [a, b, c, d] => Ok(u32::from_be_bytes([a, b, c, d])),
        [a, b] => Ok(u16::from_be_bytes([a, b]) as u32),
        _ => Err(BufferError::InvalidLength(bytes.len())),
    }
}
