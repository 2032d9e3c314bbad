//! 顶点定义
//!
//! 顶点只有名称一个属性，名称即身份

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内按插入顺序分配的稠密下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名称
    name: String,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
