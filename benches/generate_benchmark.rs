//! Benchmarks for wordlist filtering, cache encoding, and random access.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordcache::cache::encode;
use wordcache::token::filter_lines;
use wordcache::CacheReader;

/// Generate a wordlist with roughly one rejected line in ten.
fn generate_wordlist(count: usize) -> Vec<u8> {
    let mut out = String::with_capacity(count * 12);
    for i in 0..count {
        if i % 10 == 0 {
            out.push_str("not a token\n");
        } else {
            out.push_str(&format!("word{}\n", i));
        }
    }
    out.into_bytes()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_lines");

    for count in [1_000, 10_000, 100_000] {
        let data = generate_wordlist(count);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| filter_lines(black_box(data)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for count in [1_000, 10_000, 100_000] {
        let tokens = filter_lines(&generate_wordlist(count));
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &tokens, |b, tokens| {
            b.iter(|| encode(black_box(tokens)).unwrap())
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let tokens = filter_lines(&generate_wordlist(100_000));
    let reader = CacheReader::from_bytes(encode(&tokens).unwrap()).unwrap();
    let len = reader.len();

    c.bench_function("cache_get", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 7919) % len;
            black_box(reader.get(black_box(i)))
        })
    });
}

criterion_group!(benches, bench_filter, bench_encode, bench_random_access);
criterion_main!(benches);
