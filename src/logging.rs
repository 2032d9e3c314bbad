//! 日志初始化
//!
//! 仅供可执行文件调用；`RUST_LOG` 优先于命令行给出的级别

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 安装全局 tracing 订阅器，日志写到 stderr
pub fn init_tracing(level: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if level.contains('=') {
            level.to_string()
        } else {
            format!("theorygraph={},tower_http={}", level, level)
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
