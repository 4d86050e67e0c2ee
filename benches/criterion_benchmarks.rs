use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use lzp::decoder::decode;
use lzp::encoder::{encode_with_options, EncodeOptions};

fn count_251() -> Vec<u8> {
    (0u8..=0xFA).collect()
}

fn repeating(len: usize) -> Vec<u8> {
    count_251().into_iter().cycle().take(len).collect()
}

fn bench_encode(c: &mut Criterion) {
    let source = repeating(64 * 1024);
    let mut target = source.clone();
    for i in (0..target.len()).step_by(97) {
        target[i] ^= 0xFF;
    }

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(target.len() as u64));
    group.bench_function("repeating_64k_with_edits", |b| {
        b.iter(|| {
            encode_with_options(
                black_box(&target),
                black_box(&[&source]),
                &EncodeOptions::default(),
            )
            .unwrap()
        })
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let source = repeating(64 * 1024);
    let mut target = source.clone();
    for i in (0..target.len()).step_by(97) {
        target[i] ^= 0xFF;
    }
    let (patch, _) =
        encode_with_options(&target, &[&source], &EncodeOptions::default()).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(target.len() as u64));
    group.bench_function("repeating_64k_with_edits", |b| {
        b.iter(|| decode(black_box(&patch), black_box(&[&source]), true).unwrap())
    });
    group.finish();
}

fn bench_no_source_compression(c: &mut Criterion) {
    let target = repeating(64 * 1024);

    let mut group = c.benchmark_group("encode_no_source");
    group.throughput(Throughput::Bytes(target.len() as u64));
    group.bench_function("repeating_64k", |b| {
        b.iter(|| {
            encode_with_options(black_box(&target), black_box(&[]), &EncodeOptions::default())
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_no_source_compression
);
criterion_main!(benches);
