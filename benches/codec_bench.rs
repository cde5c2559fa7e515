//! Criterion benchmark untuk Datasheet codec
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanowire_datasheet::{decode, decode_bytes, encode, encode_bytes, Datasheet, Decoder, Encoder};

fn bench_fixed_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_buffer");
    group.throughput(Throughput::Elements(1));

    let datasheet = Datasheet::default().with_seed(7);
    let buffer = encode(&datasheet);

    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&datasheet)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&buffer)));
    });

    group.finish();
}

fn bench_wire_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_bytes");

    let datasheet = Datasheet::default();
    let bytes = encode_bytes(&datasheet);

    group.throughput(Throughput::Elements(1));
    group.bench_function("encode_bytes", |b| {
        b.iter(|| encode_bytes(black_box(&datasheet)));
    });
    group.bench_function("decode_bytes", |b| {
        b.iter(|| decode_bytes(black_box(&bytes)));
    });

    // Batch operations
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            let mut encoder = Encoder::new(*batch_size);
            b.iter(|| {
                encoder.reset();
                for seed in 0..*batch_size {
                    encoder.encode(&datasheet.with_seed(black_box(seed as u32)));
                }
                for decoded in Decoder::new(encoder.as_bytes()) {
                    let _ = black_box(decoded);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_buffer, bench_wire_bytes);
criterion_main!(benches);
