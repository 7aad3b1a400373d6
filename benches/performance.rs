use abivec::{Pair, Vector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeMap;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_back", size), size, |b, &size| {
            b.iter(|| {
                let mut v = Vector::new();
                for i in 0..size {
                    v.push_back(black_box(i as u64));
                }
                black_box(v.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut v = Vector::new();
                v.reserve(size);
                for i in 0..size {
                    v.push_back(black_box(i as u64));
                }
                black_box(v.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            let v: Vector<u64> = (0..size as u64).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(v.at(i).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("slice_iter", size), size, |b, &size| {
            let v: Vector<u64> = (0..size as u64).collect();

            b.iter(|| {
                for item in black_box(&v) {
                    black_box(item);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("cursor_walk", size), size, |b, &size| {
            let v: Vector<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut cursor = v.begin();
                while let Some(item) = cursor.get() {
                    black_box(item);
                    cursor += 1;
                }
            });
        });
    }
    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("front_cycle", size), size, |b, &size| {
            b.iter(|| {
                let mut v = Vector::new();
                for i in 0..size {
                    black_box(v.insert(0, i as u64).is_ok());
                }
                while !v.is_empty() {
                    black_box(v.erase(0).is_ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_map_interop(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_interop");

    for pairs in [50, 500].iter() {
        group.throughput(Throughput::Elements(*pairs as u64));
        group.bench_with_input(BenchmarkId::new("round_trip", pairs), pairs, |b, &pairs| {
            let map: BTreeMap<String, u64> =
                (0..pairs as u64).map(|i| (format!("key_{}", i), i)).collect();

            b.iter(|| {
                let vector: Vector<Pair<String, u64>> = Vector::from_std_map(black_box(&map));
                black_box(vector.into_std_map())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iteration,
    bench_insert_erase,
    bench_map_interop
);
criterion_main!(benches);
