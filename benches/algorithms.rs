//! 图算法基准测试

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use theorygraph::algorithm::{kruskal, prim, BellmanFord, Dijkstra, FloydWarshall, Traverser};
use theorygraph::Graph;

/// 环 + 随机弦，保证连通
fn random_graph(n: usize, extra_edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();

    let mut edges = Vec::with_capacity(n + extra_edges);
    for i in 0..n {
        edges.push((names[i].clone(), names[(i + 1) % n].clone(), rng.gen_range(1..100)));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        edges.push((names[a].clone(), names[b].clone(), rng.gen_range(1..100)));
    }

    Graph::build(names, edges, false).expect("bench graph")
}

fn bench_traversal(c: &mut Criterion) {
    let graph = random_graph(1000, 4000, 7);

    c.bench_function("bfs_1000", |b| {
        b.iter(|| black_box(Traverser::new(&graph).bfs("v0").ok()))
    });
    c.bench_function("dfs_1000", |b| {
        b.iter(|| black_box(Traverser::new(&graph).dfs("v0").ok()))
    });
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    for n in [100, 300] {
        let graph = random_graph(n, n * 4, 11);
        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, g| {
            b.iter(|| black_box(kruskal(g)))
        });
        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, g| {
            b.iter(|| black_box(prim(g, "v0").ok()))
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for n in [50, 200] {
        let graph = random_graph(n, n * 4, 13);
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| black_box(Dijkstra::new(g).distances("v0").ok()))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| black_box(BellmanFord::new(g).distances("v0").ok()))
        });
        group.bench_with_input(BenchmarkId::new("floyd_warshall", n), &graph, |b, g| {
            b.iter(|| black_box(FloydWarshall::new(g).matrices()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_spanning_tree, bench_shortest_paths);
criterion_main!(benches);
