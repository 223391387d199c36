use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use klondike_graph::core::{generate_moves, random_deck, DefaultRanker, Table};
use klondike_graph::state_graph::{GenerateLimits, StateGraph};

// (name, deck seed, bfs depth, sample size, sampling mode)
const DEALS: &[(&str, u64, usize, usize, SamplingMode)] = &[
    ("deal_0", 0, 4, 100, SamplingMode::Auto),
    ("deal_1", 1, 5, 50, SamplingMode::Auto),
    ("deal_2", 2, 6, 20, SamplingMode::Flat),
    ("deal_3", 3, 7, 10, SamplingMode::Flat),
];

fn deal(seed: u64) -> Table {
    Table::from_deck(&random_deck(Some(seed)))
}

pub fn bench_bfs_to_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_to_depth");

    for &(deal_name, seed, depth, sample_size, sample_mode) in DEALS {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new(format!("depth_{}", depth), deal_name),
            &seed,
            |b, &seed| {
                let limits = GenerateLimits { max_depth: Some(depth), ..Default::default() };
                b.iter_with_setup(
                    || StateGraph::new(deal(seed)),
                    |mut state_graph| {
                        black_box(state_graph.generate_bfs(black_box(&limits)));
                        black_box(state_graph)
                    },
                );
            },
        );
    }
    group.finish();
}

pub fn bench_dfs_node_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_node_budget");
    let limits = GenerateLimits { max_nodes: Some(20_000), ..Default::default() };

    for &(deal_name, seed, _, _, _) in DEALS {
        group.sample_size(10);
        group.sampling_mode(SamplingMode::Flat);
        group.bench_with_input(
            BenchmarkId::new("nodes_20000", deal_name),
            &seed,
            |b, &seed| {
                b.iter_with_setup(
                    || StateGraph::new(deal(seed)),
                    |mut state_graph| {
                        black_box(state_graph.generate_dfs(&DefaultRanker, black_box(&limits)));
                        black_box(state_graph)
                    },
                );
            },
        );
    }
    group.finish();
}

pub fn bench_single_node_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_node_moves");

    for &(deal_name, seed, _, _, _) in DEALS {
        let table = deal(seed);
        group.bench_with_input(
            BenchmarkId::new("generate_and_apply", deal_name),
            &table,
            |b, table| {
                b.iter(|| {
                    let successors: Vec<Table> = generate_moves(black_box(table), None)
                        .into_iter()
                        .map(|mv| table.with_move(mv))
                        .collect();
                    black_box(successors)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    graph_benches,
    bench_bfs_to_depth, bench_dfs_node_budget, bench_single_node_moves
);

criterion_main!(graph_benches);
