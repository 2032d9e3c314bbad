//! Dijkstra 单源最短路
//!
//! 要求边权非负（不做校验）。优先队列按 (距离, 顶点顺序) 出队，
//! 松弛成功时直接调整队列中该顶点的优先级。

use super::shortest_path::ShortestPaths;
use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::trace::{format, TraceTable};
use crate::types::Distance;
use indexmap::IndexMap;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::debug;

/// Dijkstra 算法
pub struct Dijkstra<'a> {
    graph: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算从 `start` 出发的最短路
    pub fn shortest_paths(&self, start: &str) -> Result<ShortestPaths> {
        let source = self.graph.lookup_vertex(start)?.id();
        Ok(self.run(source, |_, _, _| {}))
    }

    /// 最终距离：顶点名 -> 距离（不可达为无穷）
    pub fn distances(&self, start: &str) -> Result<IndexMap<String, Distance>> {
        Ok(self.shortest_paths(start)?.distance_map(self.graph))
    }

    /// `start` 到 `end` 的最短路径边（不可达时为空）
    pub fn path(&self, start: &str, end: &str) -> Result<Vec<Edge>> {
        let paths = self.shortest_paths(start)?;
        let end = self.graph.lookup_vertex(end)?.id();
        Ok(paths.path_to(end))
    }

    /// 逐步执行表：每次取出一个顶点生成一行
    ///
    /// 列 `C` 为取出的顶点及其距离；该顶点自身列为 `(名称, 距离)`，
    /// 之前已确定的顶点为 `-`，尚未到达的为 `inf`，
    /// 其余为松弛后的 `(前驱, 距离)`。
    pub fn table(&self, start: &str) -> Result<TraceTable> {
        let source = self.graph.lookup_vertex(start)?.id();
        let graph = self.graph;

        let mut rows = Vec::new();
        self.run(source, |chosen, paths, settled| {
            let chosen_name = graph.name(chosen);
            let chosen_dist = paths.distance(chosen);

            let mut row = vec![format::choice(chosen_name, chosen_dist)];
            for v in graph.vertex_ids() {
                let cell = if v == chosen {
                    format::dijkstra_state(chosen_name, chosen_dist)
                } else if settled[v.index()] {
                    format::SETTLED.to_string()
                } else {
                    let pred = paths.predecessor(v).map_or("", |p| graph.name(p));
                    format::dijkstra_state(pred, paths.distance(v))
                };
                row.push(cell);
            }
            rows.push(row);
        });

        let mut table = TraceTable::new(
            std::iter::once("C").chain(graph.vertices().iter().map(|v| v.name())),
        );
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// 主循环；每确定一个顶点并松弛完它的出边后调用 `on_settle`
    fn run<F>(&self, source: VertexId, mut on_settle: F) -> ShortestPaths
    where
        F: FnMut(VertexId, &ShortestPaths, &[bool]),
    {
        let mut paths = ShortestPaths::new(self.graph.vertex_count(), source);
        let mut settled = vec![false; self.graph.vertex_count()];
        let mut queue = PriorityQueue::new();

        queue.push(source, Reverse((Distance::ZERO, source)));

        while let Some((current, _)) = queue.pop() {
            settled[current.index()] = true;

            for (edge, neighbor) in self.graph.arcs(current) {
                if settled[neighbor.index()] {
                    continue;
                }
                if paths.relax(edge.oriented_from(current)) {
                    // 已在队列中则调整优先级，否则插入
                    queue.push(neighbor, Reverse((paths.distance(neighbor), neighbor)));
                }
            }

            on_settle(current, &paths, &settled);
        }

        debug!(
            source = self.graph.name(source),
            reached = paths.distances().iter().filter(|d| d.is_finite()).count(),
            "dijkstra finished"
        );
        paths
    }
}
