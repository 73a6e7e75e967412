//! Runtime-typed entry points shared by the wire modules.

/// Expands to `marshal_value` and `unmarshal_value` for one wire module.
///
/// The invoking module's parent must export `WIRE` and both named traits,
/// implemented for every supported shape.
macro_rules! value_dispatch {
    (
        wire: $name:literal,
        marshal: $mtrait:ident :: $mfn:ident,
        unmarshal: $utrait:ident :: $ufn:ident $(,)?
    ) => {
        use cql_buffers::print_wire;
        use tracing::{debug, trace};

        use super::{$mtrait, $utrait, WIRE};
        use crate::value::Value;
        use crate::{CodecError, Op, Result};

        #[doc = concat!("Encodes a runtime-typed value as a `", $name, "` wire value.")]
        ///
        /// An absent [`Value::Optional`] encodes to `Ok(None)` without looking
        /// at its shape.
        pub fn marshal_value(value: &Value) -> Result<Option<Vec<u8>>> {
            trace!(wire = %WIRE, shape = %value.shape(), "marshal");
            let result = match value {
                Value::Int8(v) => v.$mfn(),
                Value::Int16(v) => v.$mfn(),
                Value::Int32(v) => v.$mfn(),
                Value::Int64(v) => v.$mfn(),
                Value::Int(v) => v.$mfn(),
                Value::Uint8(v) => v.$mfn(),
                Value::Uint16(v) => v.$mfn(),
                Value::Uint32(v) => v.$mfn(),
                Value::Uint64(v) => v.$mfn(),
                Value::Uint(v) => v.$mfn(),
                #[cfg(feature = "bigint")]
                Value::BigInt(v) => v.$mfn(),
                Value::String(v) => v.$mfn(),
                Value::Optional(n) => match n.value() {
                    Some(inner) => marshal_value(inner),
                    None => Ok(None),
                },
                Value::Float32(_) | Value::Float64(_) | Value::Bool(_) | Value::Bytes(_) => {
                    Err(CodecError::unsupported(Op::Marshal, WIRE, value.shape()))
                }
            };
            result.inspect_err(|err| debug!(wire = %WIRE, %err, "marshal rejected"))
        }

        #[doc = concat!("Decodes a `", $name, "` wire value into `target`, whose current")]
        /// variant selects the native shape.
        ///
        /// For a [`Value::Optional`] target, null input sets it absent; any
        /// other input materializes a fresh value of the underlying shape and
        /// decodes into it. On error the target is left unchanged.
        pub fn unmarshal_value(p: Option<&[u8]>, target: Option<&mut Value>) -> Result<()> {
            let Some(target) = target else {
                debug!(wire = %WIRE, bytes = %print_wire(p), "unmarshal into nil reference");
                return Err(CodecError::NullTarget { wire: WIRE });
            };
            trace!(wire = %WIRE, shape = %target.shape(), bytes = %print_wire(p), "unmarshal");
            decode(p, target).inspect_err(|err| {
                debug!(wire = %WIRE, %err, bytes = %print_wire(p), "unmarshal rejected")
            })
        }

        fn decode(p: Option<&[u8]>, target: &mut Value) -> Result<()> {
            let shape = target.shape();
            match target {
                Value::Int8(v) => *v = $utrait::$ufn(p)?,
                Value::Int16(v) => *v = $utrait::$ufn(p)?,
                Value::Int32(v) => *v = $utrait::$ufn(p)?,
                Value::Int64(v) => *v = $utrait::$ufn(p)?,
                Value::Int(v) => *v = $utrait::$ufn(p)?,
                Value::Uint8(v) => *v = $utrait::$ufn(p)?,
                Value::Uint16(v) => *v = $utrait::$ufn(p)?,
                Value::Uint32(v) => *v = $utrait::$ufn(p)?,
                Value::Uint64(v) => *v = $utrait::$ufn(p)?,
                Value::Uint(v) => *v = $utrait::$ufn(p)?,
                #[cfg(feature = "bigint")]
                Value::BigInt(v) => *v = $utrait::$ufn(p)?,
                Value::String(v) => *v = $utrait::$ufn(p)?,
                Value::Optional(n) => match p {
                    Some(_) => {
                        let mut fresh = n.shape().zero_value();
                        decode(p, &mut fresh)?;
                        n.fill(fresh);
                    }
                    None => n.clear(),
                },
                Value::Float32(_) | Value::Float64(_) | Value::Bool(_) | Value::Bytes(_) => {
                    return Err(CodecError::unsupported(Op::Unmarshal, WIRE, shape));
                }
            }
            Ok(())
        }
    };
}
