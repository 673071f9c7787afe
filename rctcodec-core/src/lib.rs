//! # rctcodec-core
//!
//! Wire codec for RCT Power devices.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame checksum calculation
//! - Value encoding to big-endian wire bytes
//! - Value decoding, including time series and event table payloads
//! - Protocol constants
//!
//! Everything here is a pure function over byte slices. Framing, transport
//! and the mapping from object ids to data types belong to the caller.

pub mod checksum;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode, decode_event_table, decode_time_series};
pub use encode::{EncodeValue, encode, encode_value};
pub use error::{Error, Result};
