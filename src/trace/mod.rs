//! 执行过程表模块
//!
//! 把算法每一步的内部状态整理成可读的表格，供展示层使用

pub mod format;
mod table;

pub use table::{BellmanFordRow, TraceTable};
