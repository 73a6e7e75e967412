//! Runtime-dispatch matrix: every supported shape must behave exactly like
//! its typed conversion, for both wire widths.

use cql_serialization::cqlint::{IntMarshal, IntUnmarshal};
use cql_serialization::smallint::{SmallIntMarshal, SmallIntUnmarshal};
use cql_serialization::{
    cqlint, smallint, CodecError, Codecs, Nullable, Op, Shape, Value, WireWidth,
};

fn samples() -> Vec<Value> {
    let mut values = vec![
        Value::Int8(-5),
        Value::Int16(-300),
        Value::Int32(40_000),
        Value::Int64(-40_000),
        Value::Int(12),
        Value::Uint8(250),
        Value::Uint16(65_535),
        Value::Uint32(70_000),
        Value::Uint64(3),
        Value::Uint(65_536),
        Value::String("123".into()),
        Value::String("".into()),
        Value::String("nope".into()),
    ];
    #[cfg(feature = "bigint")]
    values.push(Value::BigInt(cql_serialization::Integer::from(-17)));
    values
}

fn typed_int(value: &Value) -> cql_serialization::Result<Option<Vec<u8>>> {
    match value {
        Value::Int8(v) => v.marshal_int(),
        Value::Int16(v) => v.marshal_int(),
        Value::Int32(v) => v.marshal_int(),
        Value::Int64(v) => v.marshal_int(),
        Value::Int(v) => v.marshal_int(),
        Value::Uint8(v) => v.marshal_int(),
        Value::Uint16(v) => v.marshal_int(),
        Value::Uint32(v) => v.marshal_int(),
        Value::Uint64(v) => v.marshal_int(),
        Value::Uint(v) => v.marshal_int(),
        #[cfg(feature = "bigint")]
        Value::BigInt(v) => v.marshal_int(),
        Value::String(v) => v.marshal_int(),
        other => panic!("not a supported sample: {other:?}"),
    }
}

fn typed_smallint(value: &Value) -> cql_serialization::Result<Option<Vec<u8>>> {
    match value {
        Value::Int8(v) => v.marshal_smallint(),
        Value::Int16(v) => v.marshal_smallint(),
        Value::Int32(v) => v.marshal_smallint(),
        Value::Int64(v) => v.marshal_smallint(),
        Value::Int(v) => v.marshal_smallint(),
        Value::Uint8(v) => v.marshal_smallint(),
        Value::Uint16(v) => v.marshal_smallint(),
        Value::Uint32(v) => v.marshal_smallint(),
        Value::Uint64(v) => v.marshal_smallint(),
        Value::Uint(v) => v.marshal_smallint(),
        #[cfg(feature = "bigint")]
        Value::BigInt(v) => v.marshal_smallint(),
        Value::String(v) => v.marshal_smallint(),
        other => panic!("not a supported sample: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Encode dispatch
// ---------------------------------------------------------------------------

#[test]
fn encode_dispatch_matches_typed() {
    for value in samples() {
        assert_eq!(cqlint::marshal_value(&value), typed_int(&value), "int {value:?}");
        assert_eq!(
            smallint::marshal_value(&value),
            typed_smallint(&value),
            "smallint {value:?}"
        );
    }
}

#[test]
fn encode_dispatch_optional() {
    let absent = Value::absent(Shape::Int32);
    assert_eq!(cqlint::marshal_value(&absent).unwrap(), None);
    assert_eq!(smallint::marshal_value(&absent).unwrap(), None);

    // An absent value is never inspected, even for an unsupported shape.
    assert_eq!(smallint::marshal_value(&Value::absent(Shape::Float64)).unwrap(), None);

    let present = Value::from(Some(-1i8));
    assert_eq!(smallint::marshal_value(&present).unwrap(), Some(vec![0xff, 0xff]));
    assert_eq!(cqlint::marshal_value(&present).unwrap(), Some(vec![0xff; 4]));

    let overflow = Value::from(Some(100_000i64));
    assert!(matches!(
        smallint::marshal_value(&overflow),
        Err(CodecError::RangeOverflow { shape: Shape::Int64, .. })
    ));
}

#[test]
fn encode_dispatch_unsupported() {
    for value in [
        Value::Float32(1.0),
        Value::Float64(1.0),
        Value::Bool(true),
        Value::Bytes(vec![1]),
        Value::from(Some(2.5f64)),
    ] {
        let shape = value.shape();
        assert_eq!(
            smallint::marshal_value(&value).unwrap_err(),
            CodecError::UnsupportedShape {
                op: Op::Marshal,
                wire: WireWidth::SmallInt,
                shape,
            }
        );
        assert!(matches!(
            cqlint::marshal_value(&value),
            Err(CodecError::UnsupportedShape { op: Op::Marshal, .. })
        ));
    }
    assert_eq!(
        cqlint::marshal_value(&Value::Float64(0.5)).unwrap_err().to_string(),
        "failed to marshal int: unsupported value type f64"
    );
}

// ---------------------------------------------------------------------------
// Decode dispatch
// ---------------------------------------------------------------------------

#[test]
fn decode_dispatch_matches_typed_int() {
    let inputs: Vec<Option<Vec<u8>>> = vec![
        None,
        Some(vec![]),
        Some(vec![0, 0, 0, 100]),
        Some(vec![0, 0, 0, 200]),
        Some(vec![0xff, 0xff, 0xff, 0xff]),
        Some(vec![0, 1, 0, 0]),
        Some(vec![0, 0, 1]),
    ];
    for input in &inputs {
        let p = input.as_deref();
        check(p, Value::Int8(0), i8::unmarshal_int(p).map(Value::Int8));
        check(p, Value::Int16(0), i16::unmarshal_int(p).map(Value::Int16));
        check(p, Value::Int32(0), i32::unmarshal_int(p).map(Value::Int32));
        check(p, Value::Int64(0), i64::unmarshal_int(p).map(Value::Int64));
        check(p, Value::Int(0), isize::unmarshal_int(p).map(Value::Int));
        check(p, Value::Uint8(0), u8::unmarshal_int(p).map(Value::Uint8));
        check(p, Value::Uint16(0), u16::unmarshal_int(p).map(Value::Uint16));
        check(p, Value::Uint32(0), u32::unmarshal_int(p).map(Value::Uint32));
        check(p, Value::Uint64(0), u64::unmarshal_int(p).map(Value::Uint64));
        check(p, Value::Uint(0), usize::unmarshal_int(p).map(Value::Uint));
        check(p, Value::String("x".into()), String::unmarshal_int(p).map(Value::String));
        #[cfg(feature = "bigint")]
        check(
            p,
            Value::BigInt(cql_serialization::Integer::from(1)),
            cql_serialization::Integer::unmarshal_int(p).map(Value::BigInt),
        );
    }

    fn check(p: Option<&[u8]>, mut target: Value, typed: cql_serialization::Result<Value>) {
        let dynamic = cqlint::unmarshal_value(p, Some(&mut target)).map(|()| target);
        assert_eq!(dynamic, typed, "input {p:?}");
    }
}

#[test]
fn decode_dispatch_matches_typed_smallint() {
    let inputs: Vec<Option<Vec<u8>>> = vec![
        None,
        Some(vec![]),
        Some(vec![0x00, 0x64]),
        Some(vec![0x01, 0x00]),
        Some(vec![0xff, 0xff]),
        Some(vec![0, 0, 0, 1]),
    ];
    for input in &inputs {
        let p = input.as_deref();
        check(p, Value::Int8(0), i8::unmarshal_smallint(p).map(Value::Int8));
        check(p, Value::Int16(0), i16::unmarshal_smallint(p).map(Value::Int16));
        check(p, Value::Int32(0), i32::unmarshal_smallint(p).map(Value::Int32));
        check(p, Value::Int64(0), i64::unmarshal_smallint(p).map(Value::Int64));
        check(p, Value::Int(0), isize::unmarshal_smallint(p).map(Value::Int));
        check(p, Value::Uint8(0), u8::unmarshal_smallint(p).map(Value::Uint8));
        check(p, Value::Uint16(0), u16::unmarshal_smallint(p).map(Value::Uint16));
        check(p, Value::Uint32(0), u32::unmarshal_smallint(p).map(Value::Uint32));
        check(p, Value::Uint64(0), u64::unmarshal_smallint(p).map(Value::Uint64));
        check(p, Value::Uint(0), usize::unmarshal_smallint(p).map(Value::Uint));
        check(p, Value::String("x".into()), String::unmarshal_smallint(p).map(Value::String));
        #[cfg(feature = "bigint")]
        check(
            p,
            Value::BigInt(cql_serialization::Integer::from(1)),
            cql_serialization::Integer::unmarshal_smallint(p).map(Value::BigInt),
        );
    }

    fn check(p: Option<&[u8]>, mut target: Value, typed: cql_serialization::Result<Value>) {
        let dynamic = smallint::unmarshal_value(p, Some(&mut target)).map(|()| target);
        assert_eq!(dynamic, typed, "input {p:?}");
    }
}

#[test]
fn optional_shape_matches_its_payload() {
    // The reported shape is the payload's shape, so the encode range check
    // is always the one for the declared type.
    let text = Value::from(Some("300".to_owned()));
    assert_eq!(text.shape(), Shape::String);
    assert_eq!(smallint::marshal_value(&text).unwrap(), Some(vec![0x01, 0x2c]));

    let narrow = Value::from(Some(-128i8));
    assert_eq!(narrow.shape(), Shape::Int8);
    assert_eq!(smallint::marshal_value(&narrow).unwrap(), Some(vec![0xff, 0x80]));

    // A decode fills the optional with a value of its declared shape.
    let mut target = Value::absent(Shape::Int8);
    smallint::unmarshal_value(Some(&[0x00, 0x7f]), Some(&mut target)).unwrap();
    let Value::Optional(n) = &target else {
        panic!("expected an optional, got {target:?}");
    };
    assert_eq!(n.shape(), Shape::Int8);
    assert_eq!(n.value().map(Value::shape), Some(Shape::Int8));
    assert_eq!(n.value(), Some(&Value::Int8(127)));
}

#[test]
fn decode_dispatch_names_the_target_on_bad_length() {
    let mut target = Value::Uint16(0);
    assert_eq!(
        cqlint::unmarshal_value(Some(&[0, 1]), Some(&mut target)).unwrap_err(),
        CodecError::InvalidLength {
            wire: WireWidth::Int,
            shape: Shape::Uint16,
            expected: 4,
            len: 2,
        }
    );

    let mut target = Value::absent(Shape::String);
    let err = smallint::unmarshal_value(Some(&[1, 2, 3]), Some(&mut target)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to unmarshal smallint into String: the length of the data should be 0 or 2, got 3"
    );
    assert!(target.is_absent());
}

#[test]
fn decode_dispatch_null_target() {
    assert_eq!(
        cqlint::unmarshal_value(Some(&[0, 0, 0, 1]), None).unwrap_err(),
        CodecError::NullTarget { wire: WireWidth::Int }
    );
    // Rejected before any length or shape inspection.
    assert_eq!(
        smallint::unmarshal_value(Some(&[1, 2, 3]), None).unwrap_err(),
        CodecError::NullTarget { wire: WireWidth::SmallInt }
    );
}

#[test]
fn decode_dispatch_optional() {
    let mut target = Value::from(Some(9i16));
    cqlint::unmarshal_value(None, Some(&mut target)).unwrap();
    assert_eq!(target, Value::absent(Shape::Int16));

    let mut target = Value::absent(Shape::Uint64);
    cqlint::unmarshal_value(Some(&[0, 0, 0, 42]), Some(&mut target)).unwrap();
    assert_eq!(target, Value::Optional(Nullable::present(Value::Uint64(42))));

    let mut target = Value::absent(Shape::String);
    smallint::unmarshal_value(Some(&[]), Some(&mut target)).unwrap();
    assert_eq!(target, Value::from(Some("0".to_owned())));

    let mut target = Value::absent(Shape::String);
    smallint::unmarshal_value(None, Some(&mut target)).unwrap();
    assert!(target.is_absent());

    // A failed decode leaves the optional as it was.
    let mut target = Value::absent(Shape::Int8);
    assert!(cqlint::unmarshal_value(Some(&[0, 0, 1, 0]), Some(&mut target)).is_err());
    assert!(target.is_absent());
}

#[test]
fn decode_dispatch_unsupported() {
    for mut target in [
        Value::Float32(0.0),
        Value::Float64(0.0),
        Value::Bool(false),
        Value::Bytes(vec![]),
    ] {
        let shape = target.shape();
        assert_eq!(
            cqlint::unmarshal_value(Some(&[0, 0, 0, 1]), Some(&mut target)).unwrap_err(),
            CodecError::UnsupportedShape {
                op: Op::Unmarshal,
                wire: WireWidth::Int,
                shape,
            }
        );
    }

    let mut target = Value::absent(Shape::Bool);
    assert!(matches!(
        smallint::unmarshal_value(Some(&[0, 1]), Some(&mut target)),
        Err(CodecError::UnsupportedShape { shape: Shape::Bool, .. })
    ));
}

#[cfg(feature = "bigint")]
#[test]
fn decode_dispatch_bigint() {
    use cql_serialization::Integer;

    let mut target = Value::BigInt(Integer::from(1));
    cqlint::unmarshal_value(Some(&[0xff, 0xff, 0xff, 0xfe]), Some(&mut target)).unwrap();
    assert_eq!(target, Value::BigInt(Integer::from(-2)));

    let mut target = Value::absent(Shape::BigInt);
    smallint::unmarshal_value(Some(&[0x7f, 0xff]), Some(&mut target)).unwrap();
    assert_eq!(target, Value::from(Some(Integer::from(32767))));
}

#[test]
fn codecs_registry_routes_by_width() {
    let codecs = Codecs::new();
    let value = Value::Int32(32768);
    assert!(codecs.by_width(WireWidth::Int).encode(&value).is_ok());
    assert!(codecs.by_width(WireWidth::SmallInt).encode(&value).is_err());
}
