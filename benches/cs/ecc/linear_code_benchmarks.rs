use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linecode::ecc::{flip_bit, ErrorCorrection, LinearCode, LinearStreamCoder};

fn bench_block_operations(c: &mut Criterion) {
    let code = LinearCode::new();
    let message = [1u8, 0];
    let codeword = code.encode(&message).unwrap();
    let received = flip_bit(&codeword, 4).unwrap();

    c.bench_function("linear_5_2 encode", |b| {
        b.iter(|| code.encode(black_box(&message)))
    });
    c.bench_function("linear_5_2 syndrome", |b| {
        b.iter(|| code.syndrome(black_box(&received)))
    });
    c.bench_function("linear_5_2 correct", |b| {
        b.iter(|| code.correct(black_box(&received)))
    });
    c.bench_function("linear_5_2 decode", |b| {
        b.iter(|| code.decode(black_box(&codeword)))
    });
    c.bench_function("linear_5_2 new", |b| b.iter(LinearCode::new));
}

fn bench_stream(c: &mut Criterion) {
    let coder = LinearStreamCoder::new();
    let mut group = c.benchmark_group("linear_5_2 stream");

    for size in [64usize, 1024, 16384] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        let encoded = coder.encode(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| coder.encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| coder.decode(black_box(encoded)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_operations, bench_stream);
criterion_main!(benches);
