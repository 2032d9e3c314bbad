//! 最小生成树算法
//!
//! Kruskal（全局贪心 + 并查集）与 Prim（从起点向外逐条扩展）

use super::union_find::UnionFind;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 生成树（或生成森林）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 按加入顺序排列的边
    pub edges: Vec<Edge>,
    /// 总权重
    pub total_weight: Weight,
}

impl SpanningTree {
    fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    /// 是否覆盖了图的全部顶点
    pub fn spans(&self, graph: &Graph) -> bool {
        self.edges.len() + 1 == graph.vertex_count()
    }
}

/// Kruskal 最小生成树
///
/// 与边的方向无关。图不连通时返回生成森林（边数少于 n-1），不报错。
pub fn kruskal(graph: &Graph) -> SpanningTree {
    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    // 稳定排序：同权重保持原始边顺序
    sorted.sort_by_key(|e| e.weight());

    let mut sets = UnionFind::new(graph.vertex_count());
    let mut tree = SpanningTree::default();

    for edge in sorted {
        if sets.union(edge.src().index(), edge.dst().index()) {
            tree.push(*edge);
        }
    }

    debug!(
        edges = tree.edges.len(),
        total_weight = tree.total_weight,
        "kruskal finished"
    );
    tree
}

/// Prim 最小生成树
///
/// 每轮线性扫描全部边，取跨越已访问边界的最轻边（同权重取先出现的）。
/// 无向图要求恰有一个端点已访问；有向图要求源已访问、目标未访问。
/// 仍有未访问顶点却找不到这样的边时返回 `DisconnectedGraph`。
pub fn prim(graph: &Graph, start: &str) -> Result<SpanningTree> {
    let start = graph.lookup_vertex(start)?.id();
    let total = graph.vertex_count();

    let mut visited = vec![false; total];
    let mut visited_count = 1;
    let mut tree = SpanningTree::default();

    visited[start.index()] = true;

    while visited_count != total {
        let mut closest: Option<&Edge> = None;

        for edge in graph.edges() {
            let src_visited = visited[edge.src().index()];
            let dst_visited = visited[edge.dst().index()];

            let crosses = if graph.is_directed() {
                src_visited && !dst_visited
            } else {
                src_visited != dst_visited
            };

            if crosses && closest.map_or(true, |c| edge.weight() < c.weight()) {
                closest = Some(edge);
            }
        }

        let edge = closest.ok_or(Error::DisconnectedGraph {
            visited: visited_count,
            total,
        })?;

        let (from, to) = if visited[edge.src().index()] {
            (edge.src(), edge.dst())
        } else {
            (edge.dst(), edge.src())
        };
        visited[to.index()] = true;
        visited_count += 1;
        tree.push(edge.oriented_from(from));
    }

    debug!(
        start = graph.name(start),
        edges = tree.edges.len(),
        total_weight = tree.total_weight,
        "prim finished"
    );
    Ok(tree)
}
