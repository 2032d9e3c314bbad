//! 数据导入模块
//!
//! 从前端使用的邻接表 JSON 构图：
//!
//! ```json
//! { "A": [{"target": "B", "distance": 1}], "B": [] }
//! ```
//!
//! 顶点顺序为键的顺序，之后是只作为目标出现过的名称；每个列出的邻居生成一条边，不做镜像。

use crate::error::Result;
use crate::graph::Graph;
use crate::types::Weight;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 邻接表中的一个邻居
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub target: String,
    pub distance: Weight,
}

/// 邻接表：顶点名 -> 邻居列表（保持键顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyInput {
    pub adjacency: IndexMap<String, Vec<Neighbor>>,
}

impl AdjacencyInput {
    /// 解析 JSON 字符串
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// 读取 JSON 文件
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 按边的源顶点导出邻接表；无向图的边只列在源顶点下
    pub fn from_graph(graph: &Graph) -> Self {
        let mut adjacency: IndexMap<String, Vec<Neighbor>> = graph
            .vertices()
            .iter()
            .map(|v| (v.name().to_string(), Vec::new()))
            .collect();

        for edge in graph.edges() {
            if let Some(list) = adjacency.get_mut(graph.name(edge.src())) {
                list.push(Neighbor {
                    target: graph.name(edge.dst()).to_string(),
                    distance: edge.weight(),
                });
            }
        }

        Self { adjacency }
    }

    /// 所有顶点名：先键，后仅作为目标出现的名称
    pub fn vertex_names(&self) -> Vec<String> {
        let mut names: IndexSet<&str> = self.adjacency.keys().map(String::as_str).collect();
        for neighbors in self.adjacency.values() {
            for n in neighbors {
                names.insert(n.target.as_str());
            }
        }
        names.into_iter().map(str::to_string).collect()
    }

    /// 构图
    pub fn into_graph(self, directed: bool) -> Result<Graph> {
        let vertices = self.vertex_names();
        let edges: Vec<(String, String, Weight)> = self
            .adjacency
            .into_iter()
            .flat_map(|(source, neighbors)| {
                neighbors
                    .into_iter()
                    .map(move |n| (source.clone(), n.target, n.distance))
            })
            .collect();

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            directed,
            "adjacency input parsed"
        );

        Graph::build(vertices, edges, directed)
    }
}

/// 从 JSON 文件直接构图
pub fn load_graph<P: AsRef<Path>>(path: P, directed: bool) -> Result<Graph> {
    AdjacencyInput::from_json_file(path)?.into_graph(directed)
}
