//! # rctcodec
//!
//! Rust implementation of the RCT Power device value codec.
//!
//! ## Features
//!
//! - CRC-16 (CCITT) frame checksum
//! - Typed encoding of booleans, integers, enums, floats and strings
//! - Decoding into an exhaustive [`Value`] enum, including time series and
//!   event table payloads
//! - Pure, synchronous functions with no shared state
//!
//! ## Quick Start
//!
//! ```
//! use rctcodec::{DataType, Value, checksum, decode, encode};
//!
//! fn main() -> rctcodec::Result<()> {
//!     // Write request payload for an unsigned register
//!     let payload = encode(DataType::Uint16, -1)?;
//!     assert_eq!(payload.as_ref(), &[0xFF, 0xFF]);
//!
//!     // Response payload back to a value
//!     let value = decode(DataType::Uint16, &payload)?;
//!     assert_eq!(value, Value::Uint16(65535));
//!
//!     // Raw tags from an object dictionary
//!     let data_type = DataType::try_from(9u8)?;
//!     assert_eq!(decode(data_type, &[0x40, 0x60, 0x00, 0x00])?, Value::Float(3.5));
//!
//!     // Frame trailer
//!     assert!(checksum::verify(b"\x01\x02", checksum::calculate(b"\x01\x02")));
//!     Ok(())
//! }
//! ```

// Re-exports
pub use rctcodec_core::{
    EncodeValue, Error, Result, checksum, constants, decode, decode_event_table,
    decode_time_series, encode, encode_value,
};

// Re-export types
pub use rctcodec_types::{
    DataType, EventEntry, EventKind, EventTable, TimeSeries, TimedMap, Value,
    timestamp_from_unix,
};
