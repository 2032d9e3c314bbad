//! TheoryGraph - 带执行过程表的带权图算法引擎
//!
//! 面向教学场景的内存图算法库，支持：
//! - 广度 / 深度优先遍历
//! - Kruskal、Prim 最小生成树
//! - Dijkstra、Bellman-Ford、Floyd-Warshall 最短路
//! - 逐步执行表，供前端逐行展示算法状态

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod trace;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, GraphBuilder, NamedEdge, Vertex, VertexId};
pub use import::AdjacencyInput;
pub use trace::{BellmanFordRow, TraceTable};
pub use types::{Distance, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
