//! 性能指标收集模块
//!
//! 按算法统计调用次数、失败次数与耗时，可导出为 Prometheus 文本格式

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 被统计的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Kruskal,
    Prim,
    Dijkstra,
    FloydWarshall,
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Kruskal,
        Algorithm::Prim,
        Algorithm::Dijkstra,
        Algorithm::FloydWarshall,
        Algorithm::BellmanFord,
    ];

    /// 指标标签值
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::FloydWarshall => "floyd_warshall",
            Algorithm::BellmanFord => "bellman_ford",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

/// 单个算法的计数器
#[derive(Debug, Default)]
struct AlgorithmStats {
    /// 调用次数
    invocations: AtomicU64,
    /// 失败次数
    failures: AtomicU64,
    /// 总耗时（微秒）
    total_duration_us: AtomicU64,
}

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    algorithms: [AlgorithmStats; 7],
    /// 成功构建的图数量
    graphs_built: AtomicU64,
    /// 启动时间
    start_time: Instant,
}

/// 单个算法的指标快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSnapshot {
    pub invocations: u64,
    pub failures: u64,
    pub avg_duration_ms: f64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub algorithms: IndexMap<String, AlgorithmSnapshot>,
    pub graphs_built: u64,
    pub uptime_seconds: u64,
}

/// Prometheus 格式指标
#[derive(Debug, Clone)]
pub struct PrometheusMetrics {
    pub content: String,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            algorithms: Default::default(),
            graphs_built: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// 记录一次算法调用开始
    pub fn record_start(&self, algorithm: Algorithm) -> RunTimer {
        self.algorithms[algorithm.slot()]
            .invocations
            .fetch_add(1, Ordering::Relaxed);
        RunTimer::new(algorithm)
    }

    /// 记录算法调用结束
    pub fn record_complete(&self, timer: RunTimer, success: bool) {
        let stats = &self.algorithms[timer.algorithm.slot()];
        if !success {
            stats.failures.fetch_add(1, Ordering::Relaxed);
        }
        stats
            .total_duration_us
            .fetch_add(timer.elapsed().as_micros() as u64, Ordering::Relaxed);
    }

    /// 计时执行 `f`，按返回值记录成功或失败
    pub fn track<T, E, F>(&self, algorithm: Algorithm, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        let timer = self.record_start(algorithm);
        let result = f();
        self.record_complete(timer, result.is_ok());
        result
    }

    /// 记录构图
    pub fn record_graph_built(&self) {
        self.graphs_built.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let algorithms = Algorithm::ALL
            .iter()
            .map(|algorithm| {
                let stats = &self.algorithms[algorithm.slot()];
                let invocations = stats.invocations.load(Ordering::Relaxed);
                let total_us = stats.total_duration_us.load(Ordering::Relaxed);

                let avg_duration_ms = if invocations > 0 {
                    (total_us as f64) / (invocations as f64) / 1000.0
                } else {
                    0.0
                };

                (
                    algorithm.as_str().to_string(),
                    AlgorithmSnapshot {
                        invocations,
                        failures: stats.failures.load(Ordering::Relaxed),
                        avg_duration_ms,
                    },
                )
            })
            .collect();

        MetricsSnapshot {
            algorithms,
            graphs_built: self.graphs_built.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 导出为 Prometheus 格式
    pub fn to_prometheus(&self) -> PrometheusMetrics {
        let snapshot = self.snapshot();
        let mut content = String::new();

        let families: [(&str, &str, &str, fn(&AlgorithmSnapshot) -> String); 3] = [
            (
                "theorygraph_algorithm_runs_total",
                "Total algorithm invocations",
                "counter",
                |s| s.invocations.to_string(),
            ),
            (
                "theorygraph_algorithm_failures_total",
                "Algorithm invocations that returned an error",
                "counter",
                |s| s.failures.to_string(),
            ),
            (
                "theorygraph_algorithm_duration_avg_ms",
                "Average algorithm duration in milliseconds",
                "gauge",
                |s| format!("{:.3}", s.avg_duration_ms),
            ),
        ];

        for (name, help, kind, value) in families {
            let _ = writeln!(content, "# HELP {} {}", name, help);
            let _ = writeln!(content, "# TYPE {} {}", name, kind);
            for (algorithm, stats) in &snapshot.algorithms {
                let _ = writeln!(content, "{}{{algorithm=\"{}\"}} {}", name, algorithm, value(stats));
            }
        }

        content.push_str("# HELP theorygraph_graphs_built_total Graphs built from requests\n");
        content.push_str("# TYPE theorygraph_graphs_built_total counter\n");
        let _ = writeln!(content, "theorygraph_graphs_built_total {}", snapshot.graphs_built);

        content.push_str("# HELP theorygraph_uptime_seconds System uptime in seconds\n");
        content.push_str("# TYPE theorygraph_uptime_seconds counter\n");
        let _ = writeln!(content, "theorygraph_uptime_seconds {}", snapshot.uptime_seconds);

        PrometheusMetrics { content }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        for stats in &self.algorithms {
            stats.invocations.store(0, Ordering::Relaxed);
            stats.failures.store(0, Ordering::Relaxed);
            stats.total_duration_us.store(0, Ordering::Relaxed);
        }
        self.graphs_built.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 算法计时器
pub struct RunTimer {
    algorithm: Algorithm,
    start: Instant,
}

impl RunTimer {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}
