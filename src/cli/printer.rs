//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::graph::{Graph, NamedEdge};
use crate::trace::{format as cell, TraceTable};
use crate::types::{Distance, Weight};
use indexmap::IndexMap;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印任意列与行
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>], elapsed_ms: u64) -> String {
        if columns.is_empty() || rows.is_empty() {
            return format!("Empty set ({} ms)\n", elapsed_ms);
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set ({} ms)\n", output, rows.len(), elapsed_ms)
    }

    /// 打印执行过程表
    pub fn print_trace(&self, table: &TraceTable, elapsed_ms: u64) -> String {
        self.print_result(table.columns(), table.rows(), elapsed_ms)
    }

    /// 打印边列表，有总权重时追加一行
    pub fn print_edges(&self, edges: &[NamedEdge], total: Option<Weight>, elapsed_ms: u64) -> String {
        let columns = ["Source", "Target", "Weight"].map(String::from);
        let rows: Vec<Vec<String>> = edges
            .iter()
            .map(|e| vec![e.source.clone(), e.target.clone(), e.weight.to_string()])
            .collect();

        let mut output = self.print_result(&columns, &rows, elapsed_ms);
        if let Some(total) = total {
            output.push_str(&format!("Total weight: {}\n", total));
        }
        output
    }

    /// 打印 顶点 -> 距离，不可达为 `∞`
    pub fn print_distances(&self, distances: &IndexMap<String, Distance>, elapsed_ms: u64) -> String {
        let columns = ["Vertex", "Distance"].map(String::from);
        let rows: Vec<Vec<String>> = distances
            .iter()
            .map(|(name, d)| vec![name.clone(), cell::distance(*d)])
            .collect();
        self.print_result(&columns, &rows, elapsed_ms)
    }

    /// 打印访问顺序
    pub fn print_order(&self, order: &[String], elapsed_ms: u64) -> String {
        let columns = ["Step", "Vertex"].map(String::from);
        let rows: Vec<Vec<String>> = order
            .iter()
            .enumerate()
            .map(|(i, name)| vec![(i + 1).to_string(), name.clone()])
            .collect();
        self.print_result(&columns, &rows, elapsed_ms)
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Directed", graph.is_directed().to_string()]);
        table.to_string()
    }
}
