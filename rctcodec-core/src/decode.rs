//! Value decoding
//!
//! Converts a payload slice, already cut out of its frame by the caller, back
//! into a [`Value`]. Scalars must have exactly their fixed width. Composite
//! payloads are validated as a whole before any entry is produced.

use byteorder::{BigEndian, ByteOrder};
use chrono::NaiveDateTime;
use tracing::trace;

use rctcodec_types::{DataType, EventEntry, EventTable, TimeSeries, Value, timestamp_from_unix};

use crate::constants::{EVENT_SLOT_SIZE, SAMPLE_SIZE, TIMESTAMP_SIZE, WORD_SIZE};
use crate::error::{Error, Result};

/// Decode `data` as a value of `data_type`
///
/// # Errors
///
/// - [`Error::InvalidLength`] when a scalar payload is not exactly its width
/// - [`Error::MalformedComposite`] when a time series or event table payload
///   breaks its length rules
/// - [`Error::InvalidUtf8`] for string payloads that are not UTF-8
/// - [`Error::Types`] for event table entries whose type is not ASCII
///
/// # Examples
///
/// ```
/// use rctcodec_core::decode;
/// use rctcodec_types::{DataType, Value};
///
/// assert_eq!(decode(DataType::Uint16, &[0xFF, 0xFF]).unwrap(), Value::Uint16(65535));
/// assert_eq!(decode(DataType::Int8, &[0xFE]).unwrap(), Value::Int8(-2));
/// ```
pub fn decode(data_type: DataType, data: &[u8]) -> Result<Value> {
    if let Some(expected) = data_type.fixed_width() {
        if data.len() != expected {
            return Err(Error::InvalidLength {
                data_type,
                expected,
                actual: data.len(),
            });
        }
    }

    let value = match data_type {
        DataType::Bool => Value::Bool(data[0] != 0),
        DataType::Uint8 => Value::Uint8(data[0]),
        DataType::Int8 => Value::Int8(data[0] as i8),
        DataType::Uint16 => Value::Uint16(BigEndian::read_u16(data)),
        DataType::Int16 => Value::Int16(BigEndian::read_i16(data)),
        DataType::Uint32 => Value::Uint32(BigEndian::read_u32(data)),
        DataType::Int32 => Value::Int32(BigEndian::read_i32(data)),
        DataType::Enum => Value::Enum(BigEndian::read_u16(data)),
        DataType::Float => Value::Float(BigEndian::read_f32(data)),
        DataType::String => Value::String(String::from_utf8(data.to_vec())?),
        DataType::TimeSeries => Value::TimeSeries(decode_time_series(data)?),
        DataType::EventTable => Value::EventTable(decode_event_table(data)?),
    };

    trace!(
        data_type = %data_type,
        len = data.len(),
        value = %value,
        "Decoded value"
    );

    Ok(value)
}

/// Decode a time series payload
///
/// ```text
/// ┌────────┬───────────┬──────────┬─────┬───────────┬──────────┐
/// │ anchor │ timestamp │  value   │ ... │ timestamp │  value   │
/// │  u32   │    u32    │   f32    │     │    u32    │   f32    │
/// └────────┴───────────┴──────────┴─────┴───────────┴──────────┘
/// ```
pub fn decode_time_series(data: &[u8]) -> Result<TimeSeries> {
    let body = split_anchor(DataType::TimeSeries, data, SAMPLE_SIZE)?;
    let mut series = TimeSeries::with_capacity(read_timestamp(data), body.len() / SAMPLE_SIZE);

    for sample in body.chunks_exact(SAMPLE_SIZE) {
        let timestamp = read_timestamp(&sample[..WORD_SIZE]);
        let value = BigEndian::read_f32(&sample[WORD_SIZE..]);
        series.samples.insert(timestamp, value);
    }

    trace!(
        anchor = %series.anchor,
        samples = series.len(),
        "Decoded time series"
    );

    Ok(series)
}

/// Decode an event table payload
///
/// The anchor is followed by 20-byte slots, see
/// [`EVENT_SLOT_SIZE`](crate::constants::EVENT_SLOT_SIZE) for the layout.
pub fn decode_event_table(data: &[u8]) -> Result<EventTable> {
    let body = split_anchor(DataType::EventTable, data, EVENT_SLOT_SIZE)?;
    let mut table = EventTable::with_capacity(read_timestamp(data), body.len() / EVENT_SLOT_SIZE);

    for slot in body.chunks_exact(EVENT_SLOT_SIZE) {
        let entry = decode_event_entry(slot)?;
        table.entries.insert(entry.timestamp, entry);
    }

    trace!(
        anchor = %table.anchor,
        entries = table.len(),
        "Decoded event table"
    );

    Ok(table)
}

fn decode_event_entry(slot: &[u8]) -> Result<EventEntry> {
    let word = |n: usize| BigEndian::read_u32(&slot[n * WORD_SIZE..(n + 1) * WORD_SIZE]);

    let entry_type = EventEntry::entry_type_from_word(word(0))?;
    let timestamp = timestamp_from_unix(word(1));

    let entry = if EventEntry::is_value_change_type(entry_type) {
        EventEntry::value_change(timestamp, word(2), entry_type, word(3), word(4))
    } else {
        // word 2 is reserved in this layout
        EventEntry::span(timestamp, word(4), entry_type, timestamp_from_unix(word(3)))
    };

    Ok(entry)
}

/// Check the composite length rules and return the bytes after the anchor
fn split_anchor(data_type: DataType, data: &[u8], stride: usize) -> Result<&[u8]> {
    let malformed = |reason: &'static str| Error::MalformedComposite {
        data_type,
        length: data.len(),
        reason,
    };

    if data.len() < TIMESTAMP_SIZE {
        return Err(malformed("missing anchor timestamp"));
    }
    if data.len() % WORD_SIZE != 0 {
        return Err(malformed("length is not a multiple of 4"));
    }

    let body = &data[TIMESTAMP_SIZE..];
    if body.len() % stride != 0 {
        return Err(malformed(match data_type {
            DataType::TimeSeries => "odd number of 4-byte fields after the anchor",
            _ => "length after the anchor is not a multiple of 20",
        }));
    }

    Ok(body)
}

fn read_timestamp(buf: &[u8]) -> NaiveDateTime {
    timestamp_from_unix(BigEndian::read_u32(buf))
}
