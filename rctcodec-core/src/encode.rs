//! Value encoding
//!
//! Converts a caller-supplied value into the big-endian wire bytes of a
//! [`DataType`]. Only scalar types and strings can be encoded; the composite
//! types exist on the wire as device responses only.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use rctcodec_types::{DataType, Value};

use crate::error::{Error, Result};

/// Input accepted by [`encode`]
///
/// Loosely typed on purpose: the declared [`DataType`] decides the wire
/// layout, not the Rust type of the input. Conversions exist from the native
/// integer, float, text and byte types.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Bytes),
}

impl EncodeValue {
    /// Short name of the input kind, used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EncodeValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for EncodeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for EncodeValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for EncodeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for EncodeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for EncodeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&[u8]> for EncodeValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<u8>> for EncodeValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<Bytes> for EncodeValue {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl TryFrom<&Value> for EncodeValue {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::Uint8(v) => Self::from(*v),
            Value::Int8(v) => Self::from(*v),
            Value::Uint16(v) | Value::Enum(v) => Self::from(*v),
            Value::Int16(v) => Self::from(*v),
            Value::Uint32(v) => Self::from(*v),
            Value::Int32(v) => Self::from(*v),
            Value::Float(v) => Self::from(*v),
            Value::String(v) => Self::Text(v.clone()),
            Value::TimeSeries(_) | Value::EventTable(_) => {
                return Err(Error::UnsupportedType(value.data_type()));
            }
        })
    }
}

/// Encode `value` as the wire representation of `data_type`
///
/// Unsigned types (`UINT8`, `UINT16`, `UINT32`, `ENUM`) also accept negative
/// input, which is written as its two's complement bit pattern: `-1` encodes
/// as `0xFF` for `UINT8`.
///
/// # Errors
///
/// - [`Error::UnsupportedType`] for `TIMESERIES` and `EVENT_TABLE`
/// - [`Error::ValueOutOfRange`] / [`Error::FloatOutOfRange`] when the value
///   does not fit the wire width
/// - [`Error::TypeMismatch`] when the input kind cannot be encoded as the type
///
/// # Examples
///
/// ```
/// use rctcodec_core::encode;
/// use rctcodec_types::DataType;
///
/// assert_eq!(encode(DataType::Uint16, -1).unwrap().as_ref(), &[0xFF, 0xFF]);
/// assert_eq!(encode(DataType::Bool, 5).unwrap().as_ref(), &[0x01]);
/// assert_eq!(encode(DataType::String, "abc").unwrap().as_ref(), b"abc");
/// ```
pub fn encode(data_type: DataType, value: impl Into<EncodeValue>) -> Result<Bytes> {
    let value = value.into();
    let mut buf = BytesMut::with_capacity(data_type.fixed_width().unwrap_or_default());

    match data_type {
        DataType::Bool => buf.put_u8(u8::from(truthy(data_type, &value)?)),
        DataType::Uint8 | DataType::Int8 => buf.put_u8(integer_bits(data_type, &value)? as u8),
        DataType::Uint16 | DataType::Int16 | DataType::Enum => {
            buf.put_u16(integer_bits(data_type, &value)? as u16)
        }
        DataType::Uint32 | DataType::Int32 => {
            buf.put_u32(integer_bits(data_type, &value)? as u32)
        }
        DataType::Float => buf.put_f32(single(data_type, &value)?),
        DataType::String => match value {
            EncodeValue::Text(text) => return Ok(Bytes::from(text.into_bytes())),
            EncodeValue::Bytes(raw) => return Ok(raw),
            other => {
                return Err(Error::TypeMismatch {
                    data_type,
                    found: other.kind(),
                });
            }
        },
        DataType::TimeSeries | DataType::EventTable => {
            return Err(Error::UnsupportedType(data_type));
        }
    }

    trace!(
        data_type = %data_type,
        payload = %hex::encode(&buf),
        "Encoded value"
    );

    Ok(buf.freeze())
}

/// Encode a decoded value under its own data type
pub fn encode_value(value: &Value) -> Result<Bytes> {
    encode(value.data_type(), EncodeValue::try_from(value)?)
}

fn truthy(data_type: DataType, value: &EncodeValue) -> Result<bool> {
    match *value {
        EncodeValue::Bool(v) => Ok(v),
        EncodeValue::Int(v) => Ok(v != 0),
        EncodeValue::Float(v) => Ok(v != 0.0),
        ref other => Err(Error::TypeMismatch {
            data_type,
            found: other.kind(),
        }),
    }
}

fn integer(data_type: DataType, value: &EncodeValue) -> Result<i64> {
    match *value {
        EncodeValue::Int(v) => Ok(v),
        EncodeValue::Bool(v) => Ok(i64::from(v)),
        ref other => Err(Error::TypeMismatch {
            data_type,
            found: other.kind(),
        }),
    }
}

/// Range-check an integer against the wire width of `data_type` and return
/// the low bits of its two's complement representation.
///
/// Signed types accept `-2^(n-1) ..= 2^(n-1) - 1`. Unsigned types also accept
/// the negative half, so they take `-2^(n-1) ..= 2^n - 1`.
fn integer_bits(data_type: DataType, value: &EncodeValue) -> Result<u64> {
    let v = integer(data_type, value)?;
    let bits = 8 * data_type.fixed_width().unwrap_or_default() as u32;
    let min = -(1i64 << (bits - 1));
    let max = if data_type.is_unsigned() {
        (1i64 << bits) - 1
    } else {
        (1i64 << (bits - 1)) - 1
    };
    if !(min..=max).contains(&v) {
        return Err(Error::ValueOutOfRange { data_type, value: v });
    }
    Ok((v as u64) & ((1u64 << bits) - 1))
}

fn single(data_type: DataType, value: &EncodeValue) -> Result<f32> {
    match *value {
        EncodeValue::Float(v) => {
            // rounds to nearest; only values beyond the largest finite f32 overflow
            let single = v as f32;
            if v.is_finite() && single.is_infinite() {
                return Err(Error::FloatOutOfRange(v));
            }
            Ok(single)
        }
        EncodeValue::Int(v) => Ok(v as f32),
        EncodeValue::Bool(v) => Ok(if v { 1.0 } else { 0.0 }),
        ref other => Err(Error::TypeMismatch {
            data_type,
            found: other.kind(),
        }),
    }
}
