//! TheoryGraph 服务器入口
//!
//! 启动 HTTP API 服务器

use anyhow::Context;
use clap::Parser;
use theorygraph::logging::init_tracing;
use theorygraph::server::{start_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "theorygraph-server")]
#[command(about = "TheoryGraph HTTP API 服务器")]
struct Args {
    /// 监听地址
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// 监听端口
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    start_server(config).await.context("服务器异常退出")?;

    Ok(())
}
