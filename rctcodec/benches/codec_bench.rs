//! Codec and checksum benchmarks.

use bytes::BufMut;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rctcodec::{DataType, checksum, decode, encode};

fn time_series_payload(samples: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + samples * 8);
    buf.put_u32(1_600_000_000);
    for i in 0..samples as u32 {
        buf.put_u32(1_600_000_000 + i * 300);
        buf.put_f32(i as f32 * 0.5);
    }
    buf
}

fn event_table_payload(entries: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + entries * 20);
    buf.put_u32(1_600_000_000);
    for i in 0..entries as u32 {
        let entry_type = if i % 2 == 0 { b's' } else { b'c' };
        for word in [u32::from(entry_type), 1_600_000_000 + i, i, i + 1, i + 2] {
            buf.put_u32(word);
        }
    }
    buf
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    for size in [16, 256, 4096] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| checksum::calculate(black_box(data)))
        });
    }

    group.finish();
}

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    group.bench_function("encode_uint32", |b| {
        b.iter(|| encode(DataType::Uint32, black_box(-1i64)))
    });
    group.bench_function("decode_float", |b| {
        b.iter(|| decode(DataType::Float, black_box(&[0x40u8, 0x60, 0x00, 0x00][..])))
    });

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_decode");

    for count in [10, 100, 1000] {
        let series = time_series_payload(count);
        group.throughput(Throughput::Bytes(series.len() as u64));
        group.bench_with_input(BenchmarkId::new("time_series", count), &series, |b, data| {
            b.iter(|| decode(DataType::TimeSeries, black_box(data)))
        });

        let table = event_table_payload(count);
        group.throughput(Throughput::Bytes(table.len() as u64));
        group.bench_with_input(BenchmarkId::new("event_table", count), &table, |b, data| {
            b.iter(|| decode(DataType::EventTable, black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_checksum, bench_scalars, bench_composites);
criterion_main!(benches);
