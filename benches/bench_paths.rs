use std::time::Duration;

use costargraph::{
    LabeledMultigraph,
    bench_utils::{GroupShape, character_name, generate_groups},
    build_graph, find_path,
};
use criterion::{Criterion, criterion_group, criterion_main};

const CHAIN_SEED: u64 = 0xDD21;
const UNIFORM_SEED: u64 = 0xEE45;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct PreparedGraph {
    graph: LabeledMultigraph<String, String>,
    characters: usize,
    label: &'static str,
}

fn bench_scale() -> usize {
    #[cfg(feature = "bench-ci")]
    {
        2_000
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        10_000
    }
}

fn prepared_graphs() -> Vec<PreparedGraph> {
    let characters = bench_scale();
    let chain = generate_groups(GroupShape::Chain, characters, CHAIN_SEED);
    let uniform = generate_groups(
        GroupShape::Uniform {
            books: characters,
            cast: 5,
        },
        characters,
        UNIFORM_SEED,
    );
    vec![
        PreparedGraph {
            graph: build_graph(&chain),
            characters,
            label: "chain",
        },
        PreparedGraph {
            graph: build_graph(&uniform),
            characters,
            label: "uniform",
        },
    ]
}

fn bench_find_path(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("find_path");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        let (start, end) = endpoints(prepared);
        group.bench_function(prepared.label, |b| {
            b.iter(|| find_path(&prepared.graph, &start, &end).expect("search"));
        });
    }
    group.finish();
}

fn bench_unreachable(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("find_path_unreachable");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in graphs {
        let mut graph = prepared.graph;
        let (start, _) = endpoints_in(&graph, prepared.characters);
        let island = "ISLAND".to_string();
        graph.add_node(island.clone());
        group.bench_function(prepared.label, |b| {
            b.iter(|| find_path(&graph, &start, &island).expect("search"));
        });
    }
    group.finish();
}

fn endpoints(prepared: &PreparedGraph) -> (String, String) {
    endpoints_in(&prepared.graph, prepared.characters)
}

fn endpoints_in(graph: &LabeledMultigraph<String, String>, characters: usize) -> (String, String) {
    let first = (0..characters)
        .map(character_name)
        .find(|name| graph.contains_node(name))
        .expect("start node");
    let last = (0..characters)
        .rev()
        .map(character_name)
        .find(|name| graph.contains_node(name))
        .expect("end node");
    (first, last)
}

criterion_group!(
    name = path_benches;
    config = Criterion::default();
    targets = bench_find_path, bench_unreachable
);
criterion_main!(path_benches);
