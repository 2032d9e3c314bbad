//! TheoryGraph CLI 工具
//!
//! 读取邻接表 JSON 文件，运行一个算法并打印结果

use clap::Parser;
use colored::Colorize;
use theorygraph::cli::{execute, AlgorithmCommand, PrintMode, Printer};
use theorygraph::import::load_graph;
use theorygraph::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "theorygraph-cli")]
#[command(about = "TheoryGraph 命令行工具")]
struct Args {
    /// 邻接表 JSON 文件
    #[arg(short, long)]
    graph: String,

    /// 按有向图解释边
    #[arg(short, long)]
    directed: bool,

    /// 垂直显示结果
    #[arg(short, long)]
    vertical: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: AlgorithmCommand,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    let result = load_graph(&args.graph, args.directed)
        .and_then(|graph| execute(&graph, &args.command, &printer));

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "错误:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
