//! Type definitions for rctcodec
//!
//! The logical data model shared by the codec and its callers:
//! - [`DataType`]: the closed set of wire type tags
//! - [`Value`]: a decoded value, one variant per tag
//! - [`TimeSeries`] and [`EventTable`]: the two composite structures

pub mod data_type;
pub mod error;
pub mod event;
pub mod timed_map;
pub mod value;

pub use data_type::DataType;
pub use error::{Error, Result};
pub use event::{EventEntry, EventKind, EventTable};
pub use timed_map::TimedMap;
pub use value::{TimeSeries, Value};

use chrono::{DateTime, NaiveDateTime, Utc};

/// Convert 32-bit Unix seconds from the wire into a UTC-naive timestamp.
pub fn timestamp_from_unix(secs: u32) -> NaiveDateTime {
    // Every u32 is within chrono's range, so the fallback never applies.
    DateTime::<Utc>::from_timestamp(i64::from(secs), 0)
        .unwrap_or_default()
        .naive_utc()
}
