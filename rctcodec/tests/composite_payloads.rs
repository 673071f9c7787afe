//! Time series and event table payloads as produced by a device

use bytes::BufMut;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rctcodec::{DataType, Error, EventKind, Value, decode, timestamp_from_unix};

const ANCHOR: u32 = 1_609_459_200; // 2021-01-01T00:00:00Z

fn time_series_payload(samples: &[(u32, f32)]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.put_u32(ANCHOR);
    for &(ts, value) in samples {
        buf.put_u32(ts);
        buf.put_f32(value);
    }
    buf
}

#[test]
fn test_time_series_from_hex_fixture() {
    // anchor, (anchor + 300, 230.5), (anchor + 600, 231.25)
    let data = hex::decode("5fee66005fee672c436680005fee685843674000").unwrap();
    let value = decode(DataType::TimeSeries, &data).unwrap();
    let series = value.as_time_series().unwrap();

    assert_eq!(series.anchor, timestamp_from_unix(ANCHOR));
    assert_eq!(
        series.anchor,
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    );
    assert_eq!(series.anchor.and_utc().timestamp(), i64::from(ANCHOR));
    assert_eq!(series.get(&timestamp_from_unix(ANCHOR + 300)), Some(230.5));
    assert_eq!(series.get(&timestamp_from_unix(ANCHOR + 600)), Some(231.25));
}

#[test]
fn test_time_series_preserves_wire_order() {
    let data = time_series_payload(&[(ANCHOR + 60, 1.0), (ANCHOR - 60, 2.0), (ANCHOR, 3.0)]);
    let value = decode(DataType::TimeSeries, &data).unwrap();
    let series = value.as_time_series().unwrap();

    let samples: Vec<f32> = series.samples.values().copied().collect();
    assert_eq!(samples, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_time_series_rejects_truncated_payload() {
    let mut data = time_series_payload(&[(ANCHOR, 1.0), (ANCHOR + 1, 2.0)]);
    data.truncate(data.len() - 4);

    let err = decode(DataType::TimeSeries, &data).unwrap_err();
    assert!(matches!(err, Error::MalformedComposite { data_type: DataType::TimeSeries, .. }));
    assert!(err.is_format_error());

    data.truncate(data.len() - 1);
    assert!(decode(DataType::TimeSeries, &data).is_err());
}

#[test]
fn test_event_table_both_shapes() {
    let mut data = Vec::new();
    data.put_u32(ANCHOR);
    // 's': type, timestamp, message id, old, new
    for word in [u32::from(b's'), 1000, 5, 10, 20] {
        data.put_u32(word);
    }
    // 'c': type, timestamp, reserved, end timestamp, message id
    for word in [u32::from(b'c'), 2000, 0, 2500, 0x1234] {
        data.put_u32(word);
    }

    let value = decode(DataType::EventTable, &data).unwrap();
    let table = match value {
        Value::EventTable(table) => table,
        other => panic!("Expected event table, got {other}"),
    };
    assert_eq!(table.anchor, timestamp_from_unix(ANCHOR));
    assert_eq!(table.len(), 2);

    let change = table.get(&timestamp_from_unix(1000)).unwrap();
    assert_eq!(change.entry_type(), 's');
    assert_eq!(change.message_id, 5);
    assert_eq!(change.kind(), EventKind::ValueChange { value_old: 10, value_new: 20 });
    assert_eq!(change.timestamp_end(), None);

    let span = table.get(&timestamp_from_unix(2000)).unwrap();
    assert_eq!(span.entry_type(), 'c');
    assert_eq!(span.message_id, 0x1234);
    assert_eq!(span.timestamp_end(), Some(timestamp_from_unix(2500)));
    assert_eq!(span.value_old(), None);
    assert_eq!(span.value_new(), None);
}

#[test]
fn test_event_table_rejects_partial_slot() {
    let mut data = Vec::new();
    data.put_u32(ANCHOR);
    for word in [u32::from(b'w'), 1000, 5, 10] {
        data.put_u32(word);
    }

    let err = decode(DataType::EventTable, &data).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedComposite { data_type: DataType::EventTable, length: 20, .. }
    ));
}
