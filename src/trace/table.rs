//! 执行过程表
//!
//! 每一步的算法状态转成一行可读字符串，所有行列数相同

use super::format;
use crate::error::{Error, Result};
use crate::types::{Distance, Weight};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 矩形表格：每行恰好每列一个单元格
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TraceTable {
    /// 创建空表
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 追加一行，单元格数必须等于列数
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::Validation(format!(
                "表格行有 {} 个单元格，期望 {} 个",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// 列名
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 所有行
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按行号与列名取单元格
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// 转成“列名 -> 单元格”的记录列表
    ///
    /// 列名重复时后出现的单元格覆盖先出现的，需要完整数据时直接序列化表格本身。
    pub fn to_records(&self) -> Vec<IndexMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

/// Bellman-Ford（队列版本）执行表的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BellmanFordRow {
    /// 顶点名 -> "(d, p)"
    pub states: IndexMap<String, String>,
    /// 本行开始时的处理队列（队首在前）
    pub list: Vec<String>,
    /// 本行选中的顶点，最后一行为空
    pub choice_name: Option<String>,
    /// 选中顶点当时的距离，无穷时为空
    pub choice_distance: Option<Weight>,
}

impl BellmanFordRow {
    /// 汇总成表格：`L`、`Choice`，之后每个顶点一列
    pub fn to_table(rows: &[BellmanFordRow]) -> Result<TraceTable> {
        let vertex_columns: Vec<String> = rows
            .first()
            .map(|r| r.states.keys().cloned().collect())
            .unwrap_or_default();

        let mut table = TraceTable::new(
            ["L".to_string(), "Choice".to_string()]
                .into_iter()
                .chain(vertex_columns.iter().cloned()),
        );

        for row in rows {
            let choice = match &row.choice_name {
                Some(name) => format::choice(name, Distance::from(row.choice_distance)),
                None => format::SETTLED.to_string(),
            };

            let mut cells = vec![row.list.join(" "), choice];
            for column in &vertex_columns {
                cells.push(row.states.get(column).cloned().unwrap_or_default());
            }
            table.push_row(cells)?;
        }

        Ok(table)
    }
}
