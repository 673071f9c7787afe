//! Error types for rctcodec-core

use rctcodec_types::DataType;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codec errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Integer does not fit the wire width of the declared type
    #[error("Value {value} out of range for {data_type}")]
    ValueOutOfRange {
        data_type: DataType,
        value: i64,
    },

    /// Finite float too large for single precision
    #[error("Float {0} too large to encode as single precision")]
    FloatOutOfRange(f64),

    /// Payload length differs from the fixed width of a scalar type
    #[error("Invalid {data_type} payload: expected {expected} bytes, got {actual} bytes")]
    InvalidLength {
        data_type: DataType,
        expected: usize,
        actual: usize,
    },

    /// Composite payload violates its structural length rules
    #[error("Malformed {data_type} payload of {length} bytes: {reason}")]
    MalformedComposite {
        data_type: DataType,
        length: usize,
        reason: &'static str,
    },

    /// Type has no encoder (composites are decode-only)
    #[error("Unsupported type for encoding: {0}")]
    UnsupportedType(DataType),

    /// Input value kind cannot be encoded as the declared type
    #[error("Invalid value of type {found} for {data_type} encoding")]
    TypeMismatch {
        data_type: DataType,
        found: &'static str,
    },

    /// Unknown type tag or invalid event entry type
    #[error(transparent)]
    Types(#[from] rctcodec_types::Error),

    /// String payload is not valid UTF-8
    #[error("Invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Value out of range, or payload bytes inconsistent with the type
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::ValueOutOfRange { .. }
                | Self::FloatOutOfRange(_)
                | Self::InvalidLength { .. }
                | Self::MalformedComposite { .. }
                | Self::Types(rctcodec_types::Error::InvalidEntryType(_))
        )
    }

    /// Unknown or unsupported type, or the wrong kind of input value
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType(_)
                | Self::TypeMismatch { .. }
                | Self::Types(
                    rctcodec_types::Error::UnknownDataType(_) | rctcodec_types::Error::Parse(_)
                )
        )
    }

    /// Text decoding failed
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::InvalidUtf8(_))
    }
}
