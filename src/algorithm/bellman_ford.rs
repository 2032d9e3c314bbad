//! Bellman-Ford 单源最短路
//!
//! 两个变体：
//! - `table`：队列版本（SPFA），记录每次出队前的状态，用于教学展示；
//! - `shortest_paths`：经典版本，最多 V-1 轮全边松弛，再多做一轮检测负权环。
//!
//! 边的方向由图的 `directed` 标志决定。

use super::shortest_path::ShortestPaths;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::trace::{format, BellmanFordRow};
use crate::types::Distance;
use indexmap::IndexMap;
use std::collections::VecDeque;
use tracing::debug;

/// Bellman-Ford 算法
pub struct BellmanFord<'a> {
    graph: &'a Graph,
}

impl<'a> BellmanFord<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 队列版本的执行表
    ///
    /// 每次处理队首顶点前输出一行（队列内容、选中顶点及其距离、各顶点 `(d, p)`），
    /// 队列清空后再输出最后一行。改进路径的边数达到顶点数时说明存在可达的负权环，
    /// 返回 `NegativeCycle`。
    pub fn table(&self, start: &str) -> Result<Vec<BellmanFordRow>> {
        let source = self.graph.lookup_vertex(start)?.id();
        let n = self.graph.vertex_count();

        let mut paths = ShortestPaths::new(n, source);
        let mut hops = vec![0usize; n];
        let mut queue = VecDeque::new();
        let mut in_queue = vec![false; n];
        let mut rows = Vec::new();

        queue.push_back(source);
        in_queue[source.index()] = true;

        while let Some(&chosen) = queue.front() {
            rows.push(self.snapshot(&paths, &queue, Some(chosen)));

            queue.pop_front();
            in_queue[chosen.index()] = false;

            for (edge, target) in self.graph.arcs(chosen) {
                if !paths.relax(edge.oriented_from(chosen)) {
                    continue;
                }

                hops[target.index()] = hops[chosen.index()] + 1;
                if hops[target.index()] >= n {
                    return Err(Error::NegativeCycle(self.graph.name(target).to_string()));
                }

                if !in_queue[target.index()] {
                    queue.push_back(target);
                    in_queue[target.index()] = true;
                }
            }
        }

        rows.push(self.snapshot(&paths, &queue, None));

        debug!(
            source = self.graph.name(source),
            rows = rows.len(),
            "bellman-ford table finished"
        );
        Ok(rows)
    }

    /// 经典版本：最终距离与前驱
    ///
    /// 某一轮没有任何更新时提前结束；V-1 轮后仍能松弛则返回 `NegativeCycle`，
    /// 此时的距离无效。
    pub fn shortest_paths(&self, start: &str) -> Result<ShortestPaths> {
        let source = self.graph.lookup_vertex(start)?.id();
        let n = self.graph.vertex_count();
        let mut paths = ShortestPaths::new(n, source);

        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            let mut updated = false;
            for (edge, from) in self.directed_edges() {
                updated |= paths.relax(edge.oriented_from(from));
            }
            if !updated {
                break;
            }
        }

        for (edge, from) in self.directed_edges() {
            let edge = edge.oriented_from(from);
            if paths.can_relax(&edge) {
                return Err(Error::NegativeCycle(self.graph.name(edge.dst()).to_string()));
            }
        }

        debug!(
            source = self.graph.name(source),
            passes,
            "bellman-ford finished"
        );
        Ok(paths)
    }

    /// 最终距离：顶点名 -> 距离
    pub fn distances(&self, start: &str) -> Result<IndexMap<String, Distance>> {
        Ok(self.shortest_paths(start)?.distance_map(self.graph))
    }

    /// `start` 到 `end` 的最短路径边（不可达时为空）
    pub fn path(&self, start: &str, end: &str) -> Result<Vec<Edge>> {
        let paths = self.shortest_paths(start)?;
        let end = self.graph.lookup_vertex(end)?.id();
        Ok(paths.path_to(end))
    }

    /// 最短路树的边：每个可达的非源顶点的前驱边
    pub fn tree(&self, start: &str) -> Result<Vec<Edge>> {
        Ok(self.shortest_paths(start)?.tree_edges())
    }

    /// 每条边在方向语义下的 (边, 出发端点)，无向边两个方向各一次
    fn directed_edges(&self) -> impl Iterator<Item = (&'a Edge, VertexId)> + 'a {
        let graph = self.graph;
        graph
            .edges()
            .iter()
            .flat_map(move |edge| graph.directions(edge).map(move |(from, _)| (edge, from)))
    }

    fn snapshot(
        &self,
        paths: &ShortestPaths,
        queue: &VecDeque<VertexId>,
        chosen: Option<VertexId>,
    ) -> BellmanFordRow {
        let states = self
            .graph
            .vertices()
            .iter()
            .map(|v| {
                let pred = paths.predecessor(v.id()).map(|p| self.graph.name(p));
                (v.name().to_string(), format::bf_state(paths.distance(v.id()), pred))
            })
            .collect();

        BellmanFordRow {
            states,
            list: queue
                .iter()
                .map(|&v| self.graph.name(v).to_string())
                .collect(),
            choice_name: chosen.map(|v| self.graph.name(v).to_string()),
            choice_distance: chosen.and_then(|v| paths.distance(v).value()),
        }
    }
}
