use criterion::{Criterion, Throughput, BenchmarkId, black_box, criterion_group, criterion_main};
use incremental_delaunay::Triangulation;
use incremental_delaunay::tests::util;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &count in [100usize, 1000, 5000].iter() {
        let points = util::points::random(0, count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                let mut triangulation = Triangulation::new();
                util::insert_all(&mut triangulation, black_box(points)).expect("Insertion failed");
                triangulation
            })
        });
    }

    group.finish();

    let mut triangulation = Triangulation::new();
    util::insert_all(&mut triangulation, &util::points::random(0, 1000)).expect("Insertion failed");
    c.bench_function("export", |b| b.iter(|| black_box(&triangulation).export()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
