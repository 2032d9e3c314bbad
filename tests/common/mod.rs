//! 集成测试共用的图
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use theorygraph::{Graph, GraphBuilder, Weight};

/// 演示图：A-B(1), B-C(2), A-C(4), C-D(1)
pub fn demo_graph(directed: bool) -> Graph {
    GraphBuilder::new()
        .directed(directed)
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B", 1)
        .edge("B", "C", 2)
        .edge("A", "C", 4)
        .edge("C", "D", 1)
        .build()
        .unwrap()
}

/// 演示图的邻接表 JSON（每条边列在源顶点下）
pub const DEMO_JSON: &str = r#"{
    "A": [{"target": "B", "distance": 1}, {"target": "C", "distance": 4}],
    "B": [{"target": "C", "distance": 2}],
    "C": [{"target": "D", "distance": 1}],
    "D": []
}"#;

pub fn vertex_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{}", i)).collect()
}

/// 随机连通无向图：先生成随机树，再加 `extra` 条随机边，权重在 0..=max_weight 内
pub fn random_connected_graph(rng: &mut StdRng, n: usize, extra: usize, max_weight: Weight) -> Graph {
    let names = vertex_names(n);
    let mut edges = Vec::new();

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        edges.push((names[parent].clone(), names[i].clone(), rng.gen_range(0..=max_weight)));
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        edges.push((names[a].clone(), names[b].clone(), rng.gen_range(0..=max_weight)));
    }

    Graph::build(names, edges, false).unwrap()
}

/// 随机连通无向图，所有边权互不相同
pub fn random_distinct_weight_graph(rng: &mut StdRng, n: usize, extra: usize) -> Graph {
    let names = vertex_names(n);
    let mut pairs = Vec::new();

    for i in 1..n {
        pairs.push((rng.gen_range(0..i), i));
    }
    for _ in 0..extra {
        pairs.push((rng.gen_range(0..n), rng.gen_range(0..n)));
    }

    let mut weights: Vec<Weight> = (1..=pairs.len() as Weight).collect();
    weights.shuffle(rng);

    let edges: Vec<(String, String, Weight)> = pairs
        .into_iter()
        .zip(weights)
        .map(|((a, b), w)| (names[a].clone(), names[b].clone(), w))
        .collect();

    Graph::build(names, edges, false).unwrap()
}

/// 随机无向图，不保证连通
pub fn random_sparse_graph(rng: &mut StdRng, n: usize, edge_count: usize) -> Graph {
    let names = vertex_names(n);
    let edges: Vec<(String, String, Weight)> = (0..edge_count)
        .map(|_| {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            (names[a].clone(), names[b].clone(), rng.gen_range(1..10))
        })
        .collect();

    Graph::build(names, edges, false).unwrap()
}
