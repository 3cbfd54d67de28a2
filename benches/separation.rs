use pprof::criterion::{Output, PProfProfiler};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridwspd::{
    calculate_separation, Dijkstra, FullNodeSelectionCalculator, GridGraph, NeighbourMode, SelectionBucketCreator,
    SelectionLookupOptimizer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_graph(size: usize) -> GridGraph {
    GridGraph::new(vec![vec![true; size]; size], NeighbourMode::Manhattan).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("separation");
    group.sample_size(20);

    let size = 16;
    let graph = make_graph(size);

    group.bench_function("wspd_construction", |b| {
        b.iter(|| {
            let mut pathfinder = Dijkstra::new(black_box(&graph));
            black_box(calculate_separation(&graph, &mut pathfinder));
        });
    });

    group.bench_function("full_node_selection", |b| {
        b.iter(|| {
            let mut pathfinder = Dijkstra::new(black_box(&graph));
            let mut rng = StdRng::seed_from_u64(42);
            let mut full = FullNodeSelectionCalculator::new(&graph);
            black_box(full.calculate_full_node_selection(&mut pathfinder, &mut rng));
        });
    });

    group.bench_function("selection_bucket_optimisation", |b| {
        b.iter(|| {
            let mut pathfinder = Dijkstra::new(black_box(&graph));
            let mut rng = StdRng::seed_from_u64(42);
            let mut full = FullNodeSelectionCalculator::new(&graph);
            let selections = full.calculate_full_node_selection(&mut pathfinder, &mut rng);

            let mut optimizer = SelectionLookupOptimizer::new(&graph, selections);
            optimizer.optimize();
            let (selections, left, right) = optimizer.into_parts();
            black_box(SelectionBucketCreator::new(selections, left, right).create_bucket_lookup());
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}
criterion_main!(benches);
