//! 图数据结构
//!
//! 构建后不可变的内存图，所有算法只读访问

use super::edge::{Edge, EdgeId, NamedEdge};
use super::index::{AdjacencyIndex, VertexIndex};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::Weight;
use tracing::debug;

/// 图
///
/// `directed` 决定边的解释方式：无向时每条边两个端点都可出发，
/// 有向时只能从源顶点走向目标顶点。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 是否有向
    directed: bool,
    /// 顶点（按插入顺序，下标即 VertexId）
    vertices: Vec<Vertex>,
    /// 边（按插入顺序，下标即 EdgeId）
    edges: Vec<Edge>,
    /// 名称索引
    vertex_index: VertexIndex,
    /// 邻接索引
    adjacency: AdjacencyIndex,
}

impl Graph {
    /// 由顶点名称和 (源, 目标, 权重) 三元组构图
    ///
    /// 边引用未声明的顶点或顶点名重复时返回 `Validation` 错误。
    pub fn build<V, S, E, A, B>(vertices: V, edges: E, directed: bool) -> Result<Self>
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (A, B, Weight)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut vertex_index = VertexIndex::new();
        let mut vertex_list = Vec::new();

        for name in vertices {
            let name = name.into();
            let id = VertexId::new(vertex_list.len());
            if !vertex_index.insert(&name, id) {
                return Err(Error::Validation(format!("顶点名重复: {}", name)));
            }
            vertex_list.push(Vertex::new(id, name));
        }

        let mut edge_list = Vec::new();
        for (src, dst, weight) in edges {
            let (src, dst) = (src.as_ref(), dst.as_ref());
            let src_id = vertex_index
                .get(src)
                .ok_or_else(|| Error::Validation(format!("边 {} -> {} 的源顶点 {} 不存在", src, dst, src)))?;
            let dst_id = vertex_index
                .get(dst)
                .ok_or_else(|| Error::Validation(format!("边 {} -> {} 的目标顶点 {} 不存在", src, dst, dst)))?;
            edge_list.push(Edge::new(EdgeId::new(edge_list.len()), src_id, dst_id, weight));
        }

        let adjacency = AdjacencyIndex::build(vertex_list.len(), &edge_list);

        debug!(
            vertices = vertex_list.len(),
            edges = edge_list.len(),
            directed,
            "graph built"
        );

        Ok(Self {
            directed,
            vertices: vertex_list,
            edges: edge_list,
            vertex_index,
            adjacency,
        })
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 所有边（插入顺序）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 顶点 ID 迭代器
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// 顶点名称；ID 不属于本图时返回空串
    pub fn name(&self, id: VertexId) -> &str {
        self.vertex(id).map(Vertex::name).unwrap_or("")
    }

    /// 按名称查找顶点（精确匹配优先，其次忽略大小写）
    pub fn lookup_vertex(&self, name: &str) -> Result<&Vertex> {
        self.vertex_index
            .lookup(name)
            .and_then(|id| self.vertex(id))
            .ok_or_else(|| Error::VertexNotFound(name.to_string()))
    }

    /// 顶点的所有关联边（邻接顺序），孤立顶点返回空
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .incident(vertex)
            .iter()
            .filter_map(move |&id| self.edge(id))
    }

    /// 可以从该顶点出发的边及其另一端点（邻接顺序）
    ///
    /// 无向图返回全部关联边；有向图只返回以该顶点为源的边。
    pub fn arcs(&self, vertex: VertexId) -> impl Iterator<Item = (&Edge, VertexId)> + '_ {
        let directed = self.directed;
        self.neighbors(vertex).filter_map(move |edge| {
            if directed {
                (edge.src() == vertex).then(|| (edge, edge.dst()))
            } else {
                edge.opposite(vertex).map(|other| (edge, other))
            }
        })
    }

    /// 边在当前方向语义下的可行走方向：(起点, 终点)
    ///
    /// 无向图每条边两个方向都返回，有向图只返回源到目标。
    pub fn directions(&self, edge: &Edge) -> impl Iterator<Item = (VertexId, VertexId)> {
        let reverse = (!self.directed && edge.src() != edge.dst()).then(|| (edge.dst(), edge.src()));
        std::iter::once((edge.src(), edge.dst())).chain(reverse)
    }

    /// 从 `from` 走到 `to` 的最轻的边（按方向语义）；权重相同取先出现的
    pub fn lightest_arc(&self, from: VertexId, to: VertexId) -> Option<Edge> {
        self.arcs(from)
            .filter(|&(_, other)| other == to)
            .map(|(edge, _)| edge)
            .fold(None, |best: Option<&Edge>, edge| match best {
                Some(b) if b.weight() <= edge.weight() => Some(b),
                _ => Some(edge),
            })
            .map(|edge| edge.oriented_from(from))
    }

    /// 转为按名称展示的边
    pub fn named(&self, edge: &Edge) -> NamedEdge {
        NamedEdge::new(self.name(edge.src()), self.name(edge.dst()), edge.weight())
    }

    /// 批量转为按名称展示的边
    pub fn named_edges(&self, edges: &[Edge]) -> Vec<NamedEdge> {
        edges.iter().map(|e| self.named(e)).collect()
    }

    /// 边列表的总权重
    pub fn total_weight(edges: &[Edge]) -> Weight {
        edges.iter().map(Edge::weight).sum()
    }
}

/// 构图器
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String, Weight)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否有向
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// 添加顶点
    pub fn vertex(mut self, name: impl Into<String>) -> Self {
        self.vertices.push(name.into());
        self
    }

    /// 批量添加顶点
    pub fn vertices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices.extend(names.into_iter().map(Into::into));
        self
    }

    /// 添加边
    pub fn edge(mut self, src: impl Into<String>, dst: impl Into<String>, weight: Weight) -> Self {
        self.edges.push((src.into(), dst.into(), weight));
        self
    }

    /// 构建并校验
    pub fn build(self) -> Result<Graph> {
        Graph::build(self.vertices, self.edges, self.directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(directed: bool) -> Graph {
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

    #[test]
    fn test_graph_basic() {
        let graph = sample(false);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.is_directed());

        let c = graph.lookup_vertex("c").unwrap();
        assert_eq!(c.name(), "C");

        let incident: Vec<EdgeId> = graph.neighbors(c.id()).map(Edge::id).collect();
        assert_eq!(incident, vec![EdgeId::new(1), EdgeId::new(2), EdgeId::new(3)]);
    }

    #[test]
    fn test_unknown_edge_endpoint() {
        let err = GraphBuilder::new()
            .vertex("A")
            .edge("A", "Z", 3)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_duplicate_vertex() {
        let err = GraphBuilder::new()
            .vertices(["A", "A"])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_lookup_missing() {
        let graph = sample(false);
        assert!(matches!(
            graph.lookup_vertex("Z"),
            Err(Error::VertexNotFound(name)) if name == "Z"
        ));
    }

    #[test]
    fn test_isolated_vertex_has_no_neighbors() {
        let graph = GraphBuilder::new().vertices(["A", "B"]).build().unwrap();
        let a = graph.lookup_vertex("A").unwrap().id();
        assert_eq!(graph.neighbors(a).count(), 0);
        assert_eq!(graph.arcs(a).count(), 0);
    }

    #[test]
    fn test_arcs_follow_direction() {
        let undirected = sample(false);
        let c = undirected.lookup_vertex("C").unwrap().id();
        let others: Vec<&str> = undirected.arcs(c).map(|(_, v)| undirected.name(v)).collect();
        assert_eq!(others, vec!["B", "A", "D"]);

        let directed = sample(true);
        let others: Vec<&str> = directed.arcs(c).map(|(_, v)| directed.name(v)).collect();
        assert_eq!(others, vec!["D"]);
    }

    #[test]
    fn test_lightest_arc() {
        let graph = GraphBuilder::new()
            .vertices(["A", "B"])
            .edge("A", "B", 5)
            .edge("B", "A", 2)
            .edge("A", "B", 2)
            .build()
            .unwrap();
        let a = graph.lookup_vertex("A").unwrap().id();
        let b = graph.lookup_vertex("B").unwrap().id();

        let e = graph.lightest_arc(a, b).unwrap();
        assert_eq!(e.id(), EdgeId::new(1));
        assert_eq!((e.src(), e.dst()), (a, b));

        assert_eq!(Graph::total_weight(graph.edges()), 9);
    }
}
