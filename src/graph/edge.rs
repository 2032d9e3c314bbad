//! 边定义
//!
//! 带整数权重的边；是否有向由所在图的 `directed` 标志决定

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 边 ID（图内按插入顺序分配的稠密下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
    /// 权重
    weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, src: VertexId, dst: VertexId, weight: Weight) -> Self {
        Self {
            id,
            src,
            dst,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否以该顶点为端点
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.src == vertex || self.dst == vertex
    }

    /// 给定一个端点，返回另一个端点；不是端点时返回 None
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.src == vertex {
            Some(self.dst)
        } else if self.dst == vertex {
            Some(self.src)
        } else {
            None
        }
    }

    /// 以 `from` 为起点重新定向（保留 ID 与权重）
    ///
    /// 遍历树、最短路径中的边按行走方向输出。
    pub fn oriented_from(&self, from: VertexId) -> Edge {
        if self.dst == from && self.src != from {
            Edge::new(self.id, self.dst, self.src, self.weight)
        } else {
            *self
        }
    }
}

/// 按名称展示的边（输出给调用方）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEdge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

impl NamedEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl std::fmt::Display for NamedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.source, self.target, self.weight)
    }
}
