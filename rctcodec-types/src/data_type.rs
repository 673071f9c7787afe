//! Logical type tags
//!
//! The caller (the frame or register layer) always supplies the tag. The codec
//! never infers it from the payload bytes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Wire data type of a value
///
/// Discriminants are the numeric identifiers used by the device's object
/// dictionary. `0` is reserved for "unknown" and is not a member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    Bool = 1,
    Uint8 = 2,
    Int8 = 3,
    Uint16 = 4,
    Int16 = 5,
    Uint32 = 6,
    Int32 = 7,
    Enum = 8,
    Float = 9,
    String = 10,
    TimeSeries = 11,
    EventTable = 12,
}

impl DataType {
    /// All tags, in discriminant order
    pub const ALL: [DataType; 12] = [
        Self::Bool,
        Self::Uint8,
        Self::Int8,
        Self::Uint16,
        Self::Int16,
        Self::Uint32,
        Self::Int32,
        Self::Enum,
        Self::Float,
        Self::String,
        Self::TimeSeries,
        Self::EventTable,
    ];

    /// Wire width in bytes, or `None` for variable-length types
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::Uint8 | Self::Int8 => Some(1),
            Self::Uint16 | Self::Int16 | Self::Enum => Some(2),
            Self::Uint32 | Self::Int32 | Self::Float => Some(4),
            Self::String | Self::TimeSeries | Self::EventTable => None,
        }
    }

    /// Integer types whose encoder reinterprets negative input as unsigned
    pub fn is_unsigned(self) -> bool {
        matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Enum)
    }

    /// Upper-case tag name as used in object dictionaries
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Uint8 => "UINT8",
            Self::Int8 => "INT8",
            Self::Uint16 => "UINT16",
            Self::Int16 => "INT16",
            Self::Uint32 => "UINT32",
            Self::Int32 => "INT32",
            Self::Enum => "ENUM",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::TimeSeries => "TIMESERIES",
            Self::EventTable => "EVENT_TABLE",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DataType> for u8 {
    fn from(data_type: DataType) -> Self {
        data_type as u8
    }
}

impl TryFrom<u8> for DataType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|data_type| *data_type as u8 == value)
            .ok_or(Error::UnknownDataType(value))
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Parse(format!("unknown data type name: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_try_from_known() {
        for data_type in DataType::ALL {
            assert_eq!(DataType::try_from(u8::from(data_type)).unwrap(), data_type);
        }
    }

    #[test]
    fn test_try_from_unknown() {
        assert!(matches!(DataType::try_from(0u8), Err(Error::UnknownDataType(0))));
        assert!(matches!(DataType::try_from(13u8), Err(Error::UnknownDataType(13))));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("EVENT_TABLE".parse::<DataType>().unwrap(), DataType::EventTable);
        assert_eq!("uint16".parse::<DataType>().unwrap(), DataType::Uint16);
        assert!(matches!("DOUBLE".parse::<DataType>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(DataType::TimeSeries.to_string(), "TIMESERIES");
        assert_eq!(DataType::Enum.to_string(), "ENUM");
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(DataType::Bool.fixed_width(), Some(1));
        assert_eq!(DataType::Enum.fixed_width(), Some(2));
        assert_eq!(DataType::Float.fixed_width(), Some(4));
        assert_eq!(DataType::String.fixed_width(), None);
        assert_eq!(DataType::EventTable.fixed_width(), None);
    }

    #[test]
    fn test_classification() {
        assert!(DataType::Enum.is_unsigned());
        assert!(!DataType::Int16.is_unsigned());
    }
}
