use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weighted_pool::{xoshiro::Xoshiro256, Pool};

fn criterion_benchmark(c: &mut Criterion) {
    let pool = Pool::from_elements((0..10_000_u64).map(|i| (i, i % 17))).unwrap();
    let mut rng = Xoshiro256::from("bench");
    c.bench_function("pick 10k elements", |b| {
        b.iter(|| pool.pick_with(black_box(&mut rng)))
    });
    c.bench_function("get 10k elements", |b| {
        b.iter(|| pool.get(black_box(pool.len() / 3)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
