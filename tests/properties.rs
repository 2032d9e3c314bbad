//! 算法之间的一致性检查（固定随机种子）

mod common;

use common::{demo_graph, random_connected_graph, random_distinct_weight_graph, random_sparse_graph};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use theorygraph::algorithm::{
    kruskal, prim, BellmanFord, Dijkstra, FloydWarshall, Traverser, UnionFind,
};
use theorygraph::{Distance, Error, GraphBuilder, VertexId};

const ROUNDS: usize = 30;

#[test]
fn test_dijkstra_matches_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ROUNDS {
        let graph = random_connected_graph(&mut rng, 12, 20, 50);
        let matrices = FloydWarshall::new(&graph).matrices();
        let source = graph.vertices()[0].name().to_string();

        let dist = Dijkstra::new(&graph).distances(&source).unwrap();
        for v in graph.vertex_ids() {
            assert_eq!(
                dist[graph.name(v)],
                matrices.distance(VertexId::new(0), v),
                "distance to {}",
                graph.name(v)
            );
        }
    }
}

#[test]
fn test_bellman_ford_matches_dijkstra_on_directed_graphs() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..ROUNDS {
        let undirected = random_connected_graph(&mut rng, 10, 15, 30);
        let edges: Vec<(String, String, i64)> = undirected
            .edges()
            .iter()
            .map(|e| {
                (
                    undirected.name(e.src()).to_string(),
                    undirected.name(e.dst()).to_string(),
                    e.weight(),
                )
            })
            .collect();
        let names: Vec<String> = undirected.vertices().iter().map(|v| v.name().to_string()).collect();
        let graph = theorygraph::Graph::build(names, edges, true).unwrap();

        let expected = Dijkstra::new(&graph).distances("v0").unwrap();
        assert_eq!(BellmanFord::new(&graph).distances("v0").unwrap(), expected);

        let rows = BellmanFord::new(&graph).table("v0").unwrap();
        let last = rows.last().unwrap();
        for (name, d) in &expected {
            let prefix = format!("({}, ", d);
            assert!(last.states[name].starts_with(&prefix), "{} -> {}", name, last.states[name]);
        }
    }
}

#[test]
fn test_kruskal_and_prim_agree() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let graph = random_distinct_weight_graph(&mut rng, 15, 25);
        let k = kruskal(&graph);
        let p = prim(&graph, "v0").unwrap();

        assert!(k.spans(&graph));
        assert!(p.spans(&graph));
        assert_eq!(k.total_weight, p.total_weight);
    }
}

#[test]
fn test_traversals_cover_exactly_one_component() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..ROUNDS {
        let graph = random_sparse_graph(&mut rng, 15, 10);

        let mut components = UnionFind::new(graph.vertex_count());
        for edge in graph.edges() {
            components.union(edge.src().index(), edge.dst().index());
        }

        for start in graph.vertex_ids() {
            let component: HashSet<VertexId> = graph
                .vertex_ids()
                .filter(|v| components.connected(v.index(), start.index()))
                .collect();

            let traverser = Traverser::new(&graph);
            for result in [
                traverser.bfs(graph.name(start)).unwrap(),
                traverser.dfs(graph.name(start)).unwrap(),
            ] {
                let visited: HashSet<VertexId> = result.order.iter().copied().collect();
                assert_eq!(result.order.len(), visited.len(), "vertex visited twice");
                assert_eq!(visited, component);
                assert_eq!(result.order[0], start);
                assert_eq!(result.edges.len(), component.len() - 1);
            }
        }
    }
}

#[test]
fn test_floyd_paths_sum_to_distances() {
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..ROUNDS {
        let graph = random_connected_graph(&mut rng, 10, 15, 40);
        let floyd = FloydWarshall::new(&graph);
        let matrices = floyd.matrices();

        for i in graph.vertex_ids() {
            for j in graph.vertex_ids() {
                let path = floyd.path_in(&matrices, i, j);
                let total: i64 = path.iter().map(|e| e.weight()).sum();

                if i == j {
                    assert!(path.is_empty());
                    continue;
                }
                assert_eq!(Distance::Finite(total), matrices.distance(i, j));
                assert_eq!(path.first().map(|e| e.src()), Some(i));
                assert_eq!(path.last().map(|e| e.dst()), Some(j));
            }
        }
    }
}

#[test]
fn test_directed_negative_triangle() {
    let graph = GraphBuilder::new()
        .directed(true)
        .vertices(["A", "B", "C"])
        .edge("A", "B", -1)
        .edge("B", "C", -1)
        .edge("C", "A", -1)
        .build()
        .unwrap();

    assert!(matches!(
        BellmanFord::new(&graph).distances("A"),
        Err(Error::NegativeCycle(_))
    ));
    assert!(FloydWarshall::new(&graph).matrices().has_negative_cycle());
}

#[test]
fn test_demo_scenario() {
    let graph = demo_graph(false);

    let dist = Dijkstra::new(&graph).distances("A").unwrap();
    let values: Vec<Distance> = dist.values().copied().collect();
    assert_eq!(
        values,
        vec![
            Distance::Finite(0),
            Distance::Finite(1),
            Distance::Finite(3),
            Distance::Finite(4)
        ]
    );

    let tree = kruskal(&graph);
    let edges: Vec<String> = graph
        .named_edges(&tree.edges)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(edges, vec!["A - B (1)", "C - D (1)", "B - C (2)"]);
    assert_eq!(tree.total_weight, 4);

    let bfs = Traverser::new(&graph).bfs("A").unwrap();
    let order: Vec<&str> = bfs.order.iter().map(|&v| graph.name(v)).collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}
