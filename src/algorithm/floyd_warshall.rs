//! Floyd-Warshall 全源最短路
//!
//! O(V^3)，输出距离矩阵与下一跳矩阵，顶点顺序即图中的插入顺序

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::trace::{format, TraceTable};
use crate::types::Distance;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 距离矩阵与下一跳矩阵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloydMatrices {
    vertices: Vec<String>,
    dist: Vec<Vec<Distance>>,
    next: Vec<Vec<Option<VertexId>>>,
}

/// 按名称索引的矩阵（JSON 输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloydReport {
    pub dist: IndexMap<String, IndexMap<String, Distance>>,
    pub next: IndexMap<String, IndexMap<String, Option<String>>>,
    pub vertices: Vec<String>,
}

impl FloydMatrices {
    /// 顶点顺序
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// i 到 j 的最短距离
    pub fn distance(&self, i: VertexId, j: VertexId) -> Distance {
        self.dist[i.index()][j.index()]
    }

    /// i 到 j 的最短路上 i 之后的第一个顶点
    pub fn next_hop(&self, i: VertexId, j: VertexId) -> Option<VertexId> {
        self.next[i.index()][j.index()]
    }

    /// 对角线出现负值即存在负权环
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertices.len()).any(|i| self.dist[i][i] < Distance::ZERO)
    }

    /// 转为按名称索引的矩阵
    pub fn report(&self) -> FloydReport {
        let name = |v: VertexId| self.vertices[v.index()].clone();

        let dist = self
            .vertices
            .iter()
            .zip(&self.dist)
            .map(|(row_name, row)| {
                let cells: IndexMap<String, Distance> =
                    self.vertices.iter().cloned().zip(row.iter().copied()).collect();
                (row_name.clone(), cells)
            })
            .collect();

        let next = self
            .vertices
            .iter()
            .zip(&self.next)
            .map(|(row_name, row)| {
                let cells: IndexMap<String, Option<String>> = self
                    .vertices
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|hop| hop.map(name)))
                    .collect();
                (row_name.clone(), cells)
            })
            .collect();

        FloydReport {
            dist,
            next,
            vertices: self.vertices.clone(),
        }
    }

    /// 距离矩阵表格，首列为行顶点，不可达为 `∞`
    pub fn distance_table(&self) -> Result<TraceTable> {
        self.table(|i, j| format::distance(self.dist[i][j]))
    }

    /// 下一跳矩阵表格，无下一跳为 `-`
    pub fn next_table(&self) -> Result<TraceTable> {
        self.table(|i, j| match self.next[i][j] {
            Some(hop) => self.vertices[hop.index()].clone(),
            None => format::SETTLED.to_string(),
        })
    }

    fn table<F>(&self, cell: F) -> Result<TraceTable>
    where
        F: Fn(usize, usize) -> String,
    {
        let mut table = TraceTable::new(
            std::iter::once(String::new()).chain(self.vertices.iter().cloned()),
        );
        for (i, row_name) in self.vertices.iter().enumerate() {
            let mut row = vec![row_name.clone()];
            row.extend((0..self.vertices.len()).map(|j| cell(i, j)));
            table.push_row(row)?;
        }
        Ok(table)
    }
}

/// Floyd-Warshall 算法
pub struct FloydWarshall<'a> {
    graph: &'a Graph,
}

impl<'a> FloydWarshall<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算两个矩阵
    ///
    /// 初值：对角线为 0，有边处取最轻的边权（无向图双向填写），其余为无穷。
    pub fn matrices(&self) -> FloydMatrices {
        let n = self.graph.vertex_count();
        let mut dist = vec![vec![Distance::Infinite; n]; n];
        let mut next = vec![vec![None; n]; n];

        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Distance::ZERO;
        }

        for edge in self.graph.edges() {
            for (from, to) in self.graph.directions(edge) {
                if from == to {
                    continue;
                }
                let weight = Distance::Finite(edge.weight());
                if weight < dist[from.index()][to.index()] {
                    dist[from.index()][to.index()] = weight;
                    next[from.index()][to.index()] = Some(to);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        debug!(vertices = n, "floyd-warshall finished");

        FloydMatrices {
            vertices: self
                .graph
                .vertices()
                .iter()
                .map(|v| v.name().to_string())
                .collect(),
            dist,
            next,
        }
    }

    /// `start` 到 `end` 的最短路径边（不可达时为空）
    pub fn path(&self, start: &str, end: &str) -> Result<Vec<Edge>> {
        let start = self.graph.lookup_vertex(start)?.id();
        let end = self.graph.lookup_vertex(end)?.id();
        Ok(self.path_in(&self.matrices(), start, end))
    }

    /// 沿下一跳矩阵重建路径，逐跳取两顶点间最轻的边
    ///
    /// 最多走 V 跳，负权环导致的循环不会无限进行。
    pub fn path_in(&self, matrices: &FloydMatrices, start: VertexId, end: VertexId) -> Vec<Edge> {
        if matrices.next_hop(start, end).is_none() {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = start;

        while current != end && path.len() < self.graph.vertex_count() {
            let Some(hop) = matrices.next_hop(current, end) else {
                break;
            };
            let Some(edge) = self.graph.lightest_arc(current, hop) else {
                break;
            };
            path.push(edge);
            current = hop;
        }

        path
    }
}
