use std::{sync::Arc, time::Duration};

use costargraph::{
    GroupMap,
    bench_utils::{GroupShape, generate_groups},
    build_graph,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const CHAIN_SEED: u64 = 0xA17C;
const UNIFORM_SEED: u64 = 0xB25F;
const CROSSOVER_SEED: u64 = 0xC3D9;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct BenchCase {
    id: String,
    groups: Arc<GroupMap>,
}

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[500, 2_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[2_000, 10_000]
    }
}

fn bench_cases() -> Vec<BenchCase> {
    let mut cases = Vec::new();
    for &characters in bench_scales() {
        let chain = generate_groups(GroupShape::Chain, characters, CHAIN_SEED + characters as u64);
        cases.push(BenchCase {
            id: format!("chain_{characters}"),
            groups: Arc::new(chain),
        });
        let uniform = generate_groups(
            GroupShape::Uniform {
                books: characters,
                cast: 6,
            },
            characters,
            UNIFORM_SEED + characters as u64,
        );
        cases.push(BenchCase {
            id: format!("uniform_{characters}"),
            groups: Arc::new(uniform),
        });
        // a handful of huge books dominate the quadratic clique cost
        let crossover = generate_groups(
            GroupShape::Crossover {
                books: characters,
                cast: 6,
                events: 4,
                event_cast: characters / 10,
            },
            characters,
            CROSSOVER_SEED + characters as u64,
        );
        cases.push(BenchCase {
            id: format!("crossover_{characters}"),
            groups: Arc::new(crossover),
        });
    }
    cases
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        let groups = case.groups.clone();
        group.bench_function(BenchmarkId::from_parameter(case.id), |b| {
            b.iter(|| build_graph(&groups));
        });
    }
    group.finish();
}

criterion_group!(
    name = build_benches;
    config = Criterion::default();
    targets = bench_build_graph
);
criterion_main!(build_benches);
