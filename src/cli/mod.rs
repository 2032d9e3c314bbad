//! 命令行界面
//!
//! 子命令定义与结果打印

mod commands;
mod printer;

pub use commands::{execute, AlgorithmCommand};
pub use printer::{PrintMode, Printer};
