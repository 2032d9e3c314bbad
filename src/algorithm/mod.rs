//! 图算法模块
//!
//! 包含遍历、最小生成树和三种最短路算法

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod union_find;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{FloydMatrices, FloydReport, FloydWarshall};
pub use shortest_path::ShortestPaths;
pub use spanning_tree::{kruskal, prim, SpanningTree};
pub use traversal::{TraversalResult, Traverser};
pub use union_find::UnionFind;
