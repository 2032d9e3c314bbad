//! 图索引
//!
//! 名称索引与邻接索引，均在构图时一次性建立，之后只读

use crate::graph::edge::{Edge, EdgeId};
use crate::graph::vertex::VertexId;
use indexmap::IndexMap;

/// 顶点名称索引（保持插入顺序）
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    name_to_id: IndexMap<String, VertexId>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加名称；名称已存在时返回 false
    pub fn insert(&mut self, name: &str, id: VertexId) -> bool {
        if self.name_to_id.contains_key(name) {
            return false;
        }
        self.name_to_id.insert(name.to_string(), id);
        true
    }

    /// 精确查找
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// 先精确匹配，再按插入顺序做忽略大小写的匹配
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.get(name).or_else(|| {
            let wanted = name.to_lowercase();
            self.name_to_id
                .iter()
                .find(|(candidate, _)| candidate.to_lowercase() == wanted)
                .map(|(_, &id)| id)
        })
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

/// 邻接索引：顶点 -> 关联边（两个端点都登记），按边的插入顺序
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    incident: Vec<Vec<EdgeId>>,
}

impl AdjacencyIndex {
    /// 为 `vertex_count` 个顶点建立索引，每个顶点都有（可能为空的）条目
    pub fn build(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut incident = vec![Vec::new(); vertex_count];
        for edge in edges {
            incident[edge.src().index()].push(edge.id());
            // 自环只登记一次
            if edge.dst() != edge.src() {
                incident[edge.dst().index()].push(edge.id());
            }
        }
        Self { incident }
    }

    /// 顶点的关联边
    pub fn incident(&self, vertex: VertexId) -> &[EdgeId] {
        self.incident
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 顶点的度
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident(vertex).len()
    }
}
