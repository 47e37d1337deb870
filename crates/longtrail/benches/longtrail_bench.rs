use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use longtrail::{Graph, TrailSolver, brute_force::longest_trails_brute, dijkstra::shortest_paths};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Ring of `nodes` nodes with `chords` extra random edges, so most nodes end up with odd
/// degree.
fn ring_with_chords(nodes: i64, chords: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = Graph::builder();

    for node in 0..nodes {
        builder.add_edge(node, (node + 1) % nodes, rng.random_range(1..=20));
    }
    for _ in 0..chords {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        builder.add_edge(a, b, rng.random_range(1..=20));
    }

    builder.build()
}

fn shortest_paths_benchmark(c: &mut Criterion) {
    let graph = ring_with_chords(500, 500, 7);

    c.bench_function("shortest paths (500 nodes)", |b| {
        b.iter(|| shortest_paths(black_box(&graph), black_box(0)))
    });
}

fn longest_paths_benchmark(c: &mut Criterion) {
    let graph = ring_with_chords(40, 30, 11);

    c.bench_function("longest paths from (40 nodes)", |b| {
        b.iter(|| {
            TrailSolver::new(black_box(&graph))
                .longest_paths_from(black_box(0))
                .unwrap()
        })
    });

    c.bench_function("longest trail warm cache", |b| {
        let mut solver = TrailSolver::new(&graph);
        b.iter(|| solver.longest_trail(black_box(0), black_box(20)).unwrap())
    });
}

fn brute_force_benchmark(c: &mut Criterion) {
    let graph = ring_with_chords(8, 6, 3);

    c.bench_function("brute force (14 edges)", |b| {
        b.iter(|| longest_trails_brute(black_box(&graph), black_box(0)).unwrap())
    });
}

criterion_group!(
    benches,
    shortest_paths_benchmark,
    longest_paths_benchmark,
    brute_force_benchmark,
);
criterion_main!(benches);
