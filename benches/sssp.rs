use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dmy_sssp::graph::generators::random_graph;
use dmy_sssp::{Dijkstra, DmySssp, ShortestPathAlgorithm};

fn bench_sssp(c: &mut Criterion) {
    let graph = random_graph(10_000, 4, 42);

    let mut group = c.benchmark_group("sssp_random_10k");
    group.bench_function("dmy", |b| {
        let solver = DmySssp::new();
        b.iter(|| solver.compute_shortest_paths(black_box(&graph), 0).unwrap())
    });
    group.bench_function("dijkstra", |b| {
        let solver = Dijkstra::new();
        b.iter(|| solver.compute_shortest_paths(black_box(&graph), 0).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_sssp);
criterion_main!(benches);
