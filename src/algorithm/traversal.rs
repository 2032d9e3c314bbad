//! 图遍历算法
//!
//! 广度优先与深度优先遍历，输出访问顺序和遍历树的边

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// 遍历结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// 访问顺序（起点在前）
    pub order: Vec<VertexId>,
    /// 遍历树的边，按发现顺序，方向为 已知顶点 -> 新发现顶点
    pub edges: Vec<Edge>,
}

/// 遍历器
pub struct Traverser<'a> {
    graph: &'a Graph,
}

impl<'a> Traverser<'a> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 广度优先遍历
    ///
    /// 不可达的顶点不会出现在结果中。
    pub fn bfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.graph.lookup_vertex(start)?.id();

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut result = TraversalResult::default();

        visited[start.index()] = true;
        queue.push_back(start);
        result.order.push(start);

        while let Some(current) = queue.pop_front() {
            for (edge, neighbor) in self.graph.arcs(current) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back(neighbor);
                    result.order.push(neighbor);
                    result.edges.push(edge.oriented_from(current));
                }
            }
        }

        debug!(
            start = self.graph.name(start),
            reached = result.order.len(),
            "bfs finished"
        );
        Ok(result)
    }

    /// 深度优先遍历（迭代实现）
    ///
    /// 栈中记录每个顶点下一个待检查的邻边下标，一旦发现未访问的邻居立即深入，
    /// 得到与递归实现相同的前序发现顺序。
    pub fn dfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.graph.lookup_vertex(start)?.id();

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack: Vec<(VertexId, usize)> = Vec::new();
        let mut result = TraversalResult::default();

        visited[start.index()] = true;
        stack.push((start, 0));
        result.order.push(start);

        while let Some(&(current, next_index)) = stack.last() {
            let found = self
                .graph
                .arcs(current)
                .enumerate()
                .skip(next_index)
                .find(|(_, (_, neighbor))| !visited[neighbor.index()]);

            match found {
                Some((i, (edge, neighbor))) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 = i + 1;
                    }
                    visited[neighbor.index()] = true;
                    result.order.push(neighbor);
                    result.edges.push(edge.oriented_from(current));
                    stack.push((neighbor, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            start = self.graph.name(start),
            reached = result.order.len(),
            "dfs finished"
        );
        Ok(result)
    }
}
