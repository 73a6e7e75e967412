//! Runtime-typed native values for the dynamic dispatch layer.

use std::fmt;

#[cfg(feature = "bigint")]
use malachite::Integer;

/// Runtime description of a native shape.
///
/// The integer shapes, `BigInt` and `String` are accepted by the numeric
/// codecs; `Float32`, `Float64`, `Bool` and `Bytes` exist so that generic
/// call sites can describe them, and are rejected with
/// [`CodecError::UnsupportedShape`](crate::CodecError::UnsupportedShape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint,
    #[cfg(feature = "bigint")]
    BigInt,
    String,
    Float32,
    Float64,
    Bool,
    Bytes,
}

impl Shape {
    /// Rust type name of the shape.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Int8 => "i8",
            Shape::Int16 => "i16",
            Shape::Int32 => "i32",
            Shape::Int64 => "i64",
            Shape::Int => "isize",
            Shape::Uint8 => "u8",
            Shape::Uint16 => "u16",
            Shape::Uint32 => "u32",
            Shape::Uint64 => "u64",
            Shape::Uint => "usize",
            #[cfg(feature = "bigint")]
            Shape::BigInt => "Integer",
            Shape::String => "String",
            Shape::Float32 => "f32",
            Shape::Float64 => "f64",
            Shape::Bool => "bool",
            Shape::Bytes => "Vec<u8>",
        }
    }

    /// Fresh zero instance of the shape.
    pub fn zero_value(self) -> Value {
        match self {
            Shape::Int8 => Value::Int8(0),
            Shape::Int16 => Value::Int16(0),
            Shape::Int32 => Value::Int32(0),
            Shape::Int64 => Value::Int64(0),
            Shape::Int => Value::Int(0),
            Shape::Uint8 => Value::Uint8(0),
            Shape::Uint16 => Value::Uint16(0),
            Shape::Uint32 => Value::Uint32(0),
            Shape::Uint64 => Value::Uint64(0),
            Shape::Uint => Value::Uint(0),
            #[cfg(feature = "bigint")]
            Shape::BigInt => Value::BigInt(Integer::from(0)),
            Shape::String => Value::String(String::new()),
            Shape::Float32 => Value::Float32(0.0),
            Shape::Float64 => Value::Float64(0.0),
            Shape::Bool => Value::Bool(false),
            Shape::Bytes => Value::Bytes(Vec::new()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A native value whose shape is only known at runtime.
///
/// Used both as a source for `marshal_value` and as a destination for
/// `unmarshal_value`, where the current variant selects the target shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int(isize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uint(usize),
    #[cfg(feature = "bigint")]
    BigInt(Integer),
    String(String),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    /// A nullable value of a fixed underlying shape.
    Optional(Nullable),
}

impl Value {
    /// Shape of the value; for [`Value::Optional`] the underlying shape.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Int8(_) => Shape::Int8,
            Value::Int16(_) => Shape::Int16,
            Value::Int32(_) => Shape::Int32,
            Value::Int64(_) => Shape::Int64,
            Value::Int(_) => Shape::Int,
            Value::Uint8(_) => Shape::Uint8,
            Value::Uint16(_) => Shape::Uint16,
            Value::Uint32(_) => Shape::Uint32,
            Value::Uint64(_) => Shape::Uint64,
            Value::Uint(_) => Shape::Uint,
            #[cfg(feature = "bigint")]
            Value::BigInt(_) => Shape::BigInt,
            Value::String(_) => Shape::String,
            Value::Float32(_) => Shape::Float32,
            Value::Float64(_) => Shape::Float64,
            Value::Bool(_) => Shape::Bool,
            Value::Bytes(_) => Shape::Bytes,
            Value::Optional(n) => n.shape,
        }
    }

    /// An absent nullable value of the given shape.
    pub fn absent(shape: Shape) -> Self {
        Value::Optional(Nullable::absent(shape))
    }

    /// Returns `true` for an absent [`Value::Optional`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Optional(Nullable { value: None, .. }))
    }
}

/// Owning-or-absent wrapper around a value of a known shape.
///
/// The shape is kept when absent so that a decode can materialize a fresh
/// instance of the right type. A present value always has that shape.
///
/// ```compile_fail
/// use cql_serialization::{Nullable, Shape, Value};
///
/// let n = Nullable {
///     shape: Shape::Int8,
///     value: Some(Box::new(Value::from("300"))),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nullable {
    shape: Shape,
    value: Option<Box<Value>>,
}

impl Nullable {
    pub fn absent(shape: Shape) -> Self {
        Self { shape, value: None }
    }

    /// Wraps a present value. A nested optional is flattened.
    pub fn present(value: Value) -> Self {
        match value {
            Value::Optional(inner) => inner,
            value => Self {
                shape: value.shape(),
                value: Some(Box::new(value)),
            },
        }
    }

    /// Underlying shape, whether or not a value is present.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.value.map(|v| *v)
    }

    /// Stores a decoded value of the underlying shape.
    pub(crate) fn fill(&mut self, value: Value) {
        debug_assert_eq!(value.shape(), self.shape);
        self.value = Some(Box::new(value));
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
    }
}

/// Static shape of a native Rust type.
pub trait NativeShape {
    const SHAPE: Shape;
}

impl NativeShape for i8 {
    const SHAPE: Shape = Shape::Int8;
}
impl NativeShape for i16 {
    const SHAPE: Shape = Shape::Int16;
}
impl NativeShape for i32 {
    const SHAPE: Shape = Shape::Int32;
}
impl NativeShape for i64 {
    const SHAPE: Shape = Shape::Int64;
}
impl NativeShape for isize {
    const SHAPE: Shape = Shape::Int;
}
impl NativeShape for u8 {
    const SHAPE: Shape = Shape::Uint8;
}
impl NativeShape for u16 {
    const SHAPE: Shape = Shape::Uint16;
}
impl NativeShape for u32 {
    const SHAPE: Shape = Shape::Uint32;
}
impl NativeShape for u64 {
    const SHAPE: Shape = Shape::Uint64;
}
impl NativeShape for usize {
    const SHAPE: Shape = Shape::Uint;
}
#[cfg(feature = "bigint")]
impl NativeShape for Integer {
    const SHAPE: Shape = Shape::BigInt;
}
impl NativeShape for String {
    const SHAPE: Shape = Shape::String;
}
impl NativeShape for f32 {
    const SHAPE: Shape = Shape::Float32;
}
impl NativeShape for f64 {
    const SHAPE: Shape = Shape::Float64;
}
impl NativeShape for bool {
    const SHAPE: Shape = Shape::Bool;
}
impl NativeShape for Vec<u8> {
    const SHAPE: Shape = Shape::Bytes;
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int8(v)
    }
}
impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}
impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v)
    }
}
impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint8(v)
    }
}
impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Uint16(v)
    }
}
impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint32(v)
    }
}
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint64(v)
    }
}
impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint(v)
    }
}
#[cfg(feature = "bigint")]
impl From<Integer> for Value {
    fn from(v: Integer) -> Self {
        Value::BigInt(v)
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: NativeShape + Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Value::Optional(Nullable::present(v.into())),
            None => Value::absent(T::SHAPE),
        }
    }
}
