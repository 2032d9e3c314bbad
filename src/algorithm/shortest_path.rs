//! 单源最短路结果
//!
//! Dijkstra 与 Bellman-Ford 共用的距离 / 前驱表

use crate::graph::{Edge, Graph, VertexId};
use crate::types::Distance;
use indexmap::IndexMap;

/// 单源最短路
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    /// 顶点 -> 当前最短距离
    dist: Vec<Distance>,
    /// 顶点 -> 最短路上的最后一条边（方向为 前驱 -> 顶点）
    pred: Vec<Option<Edge>>,
}

impl ShortestPaths {
    /// 源点距离为 0，其余为无穷
    pub(crate) fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut dist = vec![Distance::Infinite; vertex_count];
        dist[source.index()] = Distance::ZERO;
        Self {
            source,
            dist,
            pred: vec![None; vertex_count],
        }
    }

    /// 松弛 `edge`（已按 from -> to 定向）；距离严格变小时更新并返回 true
    pub(crate) fn relax(&mut self, edge: Edge) -> bool {
        if !self.can_relax(&edge) {
            return false;
        }
        let to = edge.dst().index();
        self.dist[to] = self.dist[edge.src().index()] + edge.weight();
        self.pred[to] = Some(edge);
        true
    }

    /// 松弛 `edge` 是否会让目标距离严格变小（不修改状态）
    pub(crate) fn can_relax(&self, edge: &Edge) -> bool {
        let from_dist = self.dist[edge.src().index()];
        from_dist.is_finite() && from_dist + edge.weight() < self.dist[edge.dst().index()]
    }

    /// 源点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 到某顶点的距离
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.dist
            .get(vertex.index())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// 所有距离（按顶点顺序）
    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    /// 前驱顶点
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.pred_edge(vertex).map(|e| e.src())
    }

    /// 到达该顶点的最短路最后一条边
    pub fn pred_edge(&self, vertex: VertexId) -> Option<Edge> {
        self.pred.get(vertex.index()).copied().flatten()
    }

    /// 顶点名 -> 距离（按顶点顺序）
    pub fn distance_map(&self, graph: &Graph) -> IndexMap<String, Distance> {
        graph
            .vertices()
            .iter()
            .map(|v| (v.name().to_string(), self.distance(v.id())))
            .collect()
    }

    /// 沿前驱链重建从源点到 `target` 的路径（起点在前）
    ///
    /// 不可达或 target 即源点时返回空。
    pub fn path_to(&self, target: VertexId) -> Vec<Edge> {
        let mut path = Vec::new();
        let mut current = target;

        // 前驱链最长 n-1 条边，超出说明链中有环
        while current != self.source {
            match self.pred_edge(current) {
                Some(edge) if path.len() < self.dist.len() => {
                    path.push(edge);
                    current = edge.src();
                }
                _ => break,
            }
        }

        if current != self.source {
            return Vec::new();
        }

        path.reverse();
        path
    }

    /// 最短路树：每个可达的非源顶点的前驱边，按顶点顺序
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.pred
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.source.index())
            .filter_map(|(_, e)| *e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    #[test]
    fn test_relax_and_path() {
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        let mut sp = ShortestPaths::new(4, a);

        // 源不可达时不松弛
        assert!(!sp.relax(Edge::new(EdgeId::new(9), c, b, 1)));

        assert!(sp.relax(Edge::new(EdgeId::new(0), a, b, 5)));
        assert!(sp.relax(Edge::new(EdgeId::new(1), b, c, 1)));
        assert!(!sp.relax(Edge::new(EdgeId::new(2), a, c, 6)));
        assert!(sp.relax(Edge::new(EdgeId::new(3), a, c, 4)));

        assert_eq!(sp.distance(c), Distance::Finite(4));
        assert_eq!(sp.predecessor(c), Some(a));

        let path: Vec<EdgeId> = sp.path_to(c).iter().map(Edge::id).collect();
        assert_eq!(path, vec![EdgeId::new(3)]);
        assert!(sp.path_to(a).is_empty());
        assert!(sp.path_to(VertexId::new(3)).is_empty());

        let tree: Vec<EdgeId> = sp.tree_edges().iter().map(Edge::id).collect();
        assert_eq!(tree, vec![EdgeId::new(0), EdgeId::new(3)]);
    }
}
