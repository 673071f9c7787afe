//! Decoded logical values

use std::fmt;

use chrono::NaiveDateTime;

use crate::data_type::DataType;
use crate::event::EventTable;
use crate::timed_map::TimedMap;

/// Time series: an anchor timestamp plus float samples keyed by timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Leading timestamp of the payload
    pub anchor: NaiveDateTime,

    /// Samples in wire order
    pub samples: TimedMap<f32>,
}

impl TimeSeries {
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self {
            anchor,
            samples: TimedMap::new(),
        }
    }

    /// Empty series with room for `samples` entries
    pub fn with_capacity(anchor: NaiveDateTime, samples: usize) -> Self {
        Self {
            anchor,
            samples: TimedMap::with_capacity(samples),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, timestamp: &NaiveDateTime) -> Option<f32> {
        self.samples.get(timestamp).copied()
    }
}

/// A decoded value
///
/// One variant per [`DataType`], so callers can match exhaustively on what
/// the codec produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Uint8(u8),
    Int8(i8),
    Uint16(u16),
    Int16(i16),
    Uint32(u32),
    Int32(i32),
    Enum(u16),
    Float(f32),
    String(String),
    TimeSeries(TimeSeries),
    EventTable(EventTable),
}

impl Value {
    /// Tag this value is encoded and decoded under
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Bool,
            Self::Uint8(_) => DataType::Uint8,
            Self::Int8(_) => DataType::Int8,
            Self::Uint16(_) => DataType::Uint16,
            Self::Int16(_) => DataType::Int16,
            Self::Uint32(_) => DataType::Uint32,
            Self::Int32(_) => DataType::Int32,
            Self::Enum(_) => DataType::Enum,
            Self::Float(_) => DataType::Float,
            Self::String(_) => DataType::String,
            Self::TimeSeries(_) => DataType::TimeSeries,
            Self::EventTable(_) => DataType::EventTable,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Any integer variant, widened
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Uint8(v) => Some(v.into()),
            Self::Int8(v) => Some(v.into()),
            Self::Uint16(v) | Self::Enum(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Uint32(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        self.as_i64().and_then(|v| u32::try_from(v).ok())
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time_series(&self) -> Option<&TimeSeries> {
        match self {
            Self::TimeSeries(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_event_table(&self) -> Option<&EventTable> {
        match self {
            Self::EventTable(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Uint16(v) | Self::Enum(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::TimeSeries(ts) => write!(f, "TimeSeries[{}](samples={})", ts.anchor, ts.len()),
            Self::EventTable(table) => {
                write!(f, "EventTable[{}](entries={})", table.anchor, table.len())
            }
        }
    }
}
