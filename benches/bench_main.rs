use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snapblock::{compress, decompress, max_compressed_len};

fn text_data(size: usize) -> Vec<u8> {
    let phrase = b"the quick brown fox jumps over the lazy dog; pack my box with five dozen liquor jugs; ";
    phrase.iter().cycle().take(size).copied().collect()
}

fn random_data(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0xBE7C);
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

fn bench_compress(c: &mut Criterion) {
    let size = 1 << 20;
    let text = text_data(size);
    let random = random_data(size);

    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(size as u64));
    for level in [0usize, 5, 9] {
        let mut output = vec![0u8; max_compressed_len(size)];
        group.bench_with_input(BenchmarkId::new("text", level), &level, |b, &level| {
            b.iter(|| compress(&text, &mut output, level).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("random", level), &level, |b, &level| {
            b.iter(|| compress(&random, &mut output, level).unwrap());
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let size = 1 << 20;
    let text = text_data(size);

    let mut compressed = vec![0u8; max_compressed_len(size)];
    let n = compress(&text, &mut compressed, 9).unwrap();
    compressed.truncate(n);

    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(size as u64));
    let mut output = vec![0u8; size];
    group.bench_function("text", |b| {
        b.iter(|| decompress(&compressed, &mut output).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
