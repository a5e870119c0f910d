use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;

use lehmer::Engine;

fn criterion_benchmark(c: &mut Criterion) {
    // sanity check
    let mut engine = Engine::caching();
    assert_eq!(
        vec![2, 7, 8, 3, 9, 1, 5, 4, 6, 0],
        engine.permutation_indexes_for_size_i64(10, 1_000_000).unwrap()
    );

    fn bench(c: &mut Criterion, name: &str, mut engine: Engine, size: usize, rank: BigInt) {
        let items = (0..size).collect::<Vec<_>>();
        c.bench_function(&format!("cri_permute_{name}_{size}"), |b| {
            b.iter(|| engine.nth_permutation(&items, &rank).unwrap());
        });
    }
    bench(c, "caching", Engine::caching(), 10, BigInt::from(1_000_000));
    bench(c, "direct", Engine::direct(), 10, BigInt::from(1_000_000));
    bench(c, "caching", Engine::caching(), 1_000, BigInt::from(i64::MAX));
    bench(c, "direct", Engine::direct(), 100, BigInt::from(i64::MAX));

    let mut engine = Engine::caching();
    let largest = engine.largest_rank_for_size(1_000);
    bench(c, "caching_largest", engine, 1_000, largest);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
