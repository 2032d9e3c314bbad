//! HTTP 服务器模块
//!
//! 每个请求携带邻接表 JSON，服务器构图后直接运行对应算法并返回结果

use crate::algorithm::{
    kruskal, prim, BellmanFord, Dijkstra, FloydReport, FloydWarshall, SpanningTree,
    TraversalResult, Traverser,
};
use crate::error::{Error, Result};
use crate::graph::{Graph, NamedEdge};
use crate::import::AdjacencyInput;
use crate::metrics::{self, Algorithm};
use crate::trace::{BellmanFordRow, TraceTable};
use crate::types::{Distance, Weight};
use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// 构建路由
pub fn router() -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 指标
        .route("/metrics", get(metrics_handler))
        // 遍历
        .route("/bfs", post(bfs))
        .route("/dfs", post(dfs))
        // 最小生成树
        .route("/kruskal", post(kruskal_handler))
        .route("/prim", post(prim_handler))
        // 最短路
        .route("/dijkstra", post(dijkstra_path))
        .route("/dijkstra/distances", post(dijkstra_distances))
        .route("/dijkstra/table", post(dijkstra_table))
        .route("/floydWarshall", post(floyd_path))
        .route("/floydWarshall/matrices", post(floyd_matrices))
        .route("/bellmanFord", post(bellman_ford_tree))
        .route("/bellmanFord/distances", post(bellman_ford_distances))
        .route("/bellmanFord/table", post(bellman_ford_table))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 启动服务器
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::ServerError(format!("绑定地址失败: {}", e)))?;

    info!("TheoryGraph 服务器启动于 http://{}", addr);

    axum::serve(listener, router())
        .await
        .map_err(|e| Error::ServerError(format!("服务器错误: {}", e)))?;

    Ok(())
}

// ==================== 请求与响应 ====================

/// 查询参数；各路由只读取自己需要的字段
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmQuery {
    #[serde(default)]
    pub directed: bool,
    pub starting_vertex_name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::Validation(format!("缺少查询参数 {}", name)))
}

/// 遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalOutput {
    pub order: Vec<String>,
    pub edges: Vec<NamedEdge>,
}

impl TraversalOutput {
    fn new(graph: &Graph, result: TraversalResult) -> Self {
        Self {
            order: result
                .order
                .iter()
                .map(|&v| graph.name(v).to_string())
                .collect(),
            edges: graph.named_edges(&result.edges),
        }
    }
}

/// 生成树结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningTreeOutput {
    pub edges: Vec<NamedEdge>,
    pub total_weight: Weight,
}

impl SpanningTreeOutput {
    fn new(graph: &Graph, tree: SpanningTree) -> Self {
        Self {
            edges: graph.named_edges(&tree.edges),
            total_weight: tree.total_weight,
        }
    }
}

/// API 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 错误到 HTTP 状态码的映射
fn status_code(err: &Error) -> StatusCode {
    match err {
        Error::VertexNotFound(_) => StatusCode::NOT_FOUND,
        Error::Validation(_) | Error::ParseError(_) => StatusCode::BAD_REQUEST,
        Error::DisconnectedGraph { .. } | Error::NegativeCycle(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Error::ServerError(_) | Error::IoError(_) | Error::SerializationError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        warn!(status = status.as_u16(), "请求失败: {}", self);
        (status, ApiResponse::<()>::error(&self.to_string())).into_response()
    }
}

/// 构图、计时并运行算法
fn run<T, F>(body: &str, query: &AlgorithmQuery, algorithm: Algorithm, f: F) -> Result<ApiResponse<T>>
where
    T: Serialize,
    F: FnOnce(&Graph) -> Result<T>,
{
    let graph = AdjacencyInput::from_json_str(body)?.into_graph(query.directed)?;
    let metrics = metrics::global_metrics();
    metrics.record_graph_built();

    let data = metrics.track(algorithm, || f(&graph))?;
    Ok(ApiResponse::success(data))
}

// ==================== 处理器 ====================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus 格式指标
async fn metrics_handler() -> impl IntoResponse {
    let prom = metrics::global_metrics().to_prometheus();
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        prom.content,
    )
}

async fn bfs(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<TraversalOutput>> {
    run(&body, &query, Algorithm::Bfs, |graph| {
        let start = required(&query.starting_vertex_name, "startingVertexName")?;
        let result = Traverser::new(graph).bfs(start)?;
        Ok(TraversalOutput::new(graph, result))
    })
}

async fn dfs(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<TraversalOutput>> {
    run(&body, &query, Algorithm::Dfs, |graph| {
        let start = required(&query.starting_vertex_name, "startingVertexName")?;
        let result = Traverser::new(graph).dfs(start)?;
        Ok(TraversalOutput::new(graph, result))
    })
}

async fn kruskal_handler(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<SpanningTreeOutput>> {
    run(&body, &query, Algorithm::Kruskal, |graph| {
        Ok(SpanningTreeOutput::new(graph, kruskal(graph)))
    })
}

async fn prim_handler(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<SpanningTreeOutput>> {
    run(&body, &query, Algorithm::Prim, |graph| {
        let start = required(&query.starting_vertex_name, "startingVertexName")?;
        Ok(SpanningTreeOutput::new(graph, prim(graph, start)?))
    })
}

async fn dijkstra_path(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<Vec<NamedEdge>>> {
    run(&body, &query, Algorithm::Dijkstra, |graph| {
        let start = required(&query.start, "start")?;
        let end = required(&query.end, "end")?;
        let path = Dijkstra::new(graph).path(start, end)?;
        Ok(graph.named_edges(&path))
    })
}

async fn dijkstra_distances(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<IndexMap<String, Distance>>> {
    run(&body, &query, Algorithm::Dijkstra, |graph| {
        Dijkstra::new(graph).distances(required(&query.start, "start")?)
    })
}

/// 选择列 `C` 可能与顶点同名，因此按 `{columns, rows}` 返回
async fn dijkstra_table(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<TraceTable>> {
    run(&body, &query, Algorithm::Dijkstra, |graph| {
        Dijkstra::new(graph).table(required(&query.start, "start")?)
    })
}

async fn floyd_path(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<Vec<NamedEdge>>> {
    run(&body, &query, Algorithm::FloydWarshall, |graph| {
        let start = required(&query.start, "start")?;
        let end = required(&query.end, "end")?;
        let path = FloydWarshall::new(graph).path(start, end)?;
        Ok(graph.named_edges(&path))
    })
}

async fn floyd_matrices(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<FloydReport>> {
    run(&body, &query, Algorithm::FloydWarshall, |graph| {
        Ok(FloydWarshall::new(graph).matrices().report())
    })
}

async fn bellman_ford_tree(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<Vec<NamedEdge>>> {
    run(&body, &query, Algorithm::BellmanFord, |graph| {
        let tree = BellmanFord::new(graph).tree(required(&query.start, "start")?)?;
        Ok(graph.named_edges(&tree))
    })
}

async fn bellman_ford_distances(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<IndexMap<String, Distance>>> {
    run(&body, &query, Algorithm::BellmanFord, |graph| {
        BellmanFord::new(graph).distances(required(&query.start, "start")?)
    })
}

async fn bellman_ford_table(
    Query(query): Query<AlgorithmQuery>,
    body: String,
) -> Result<ApiResponse<Vec<BellmanFordRow>>> {
    run(&body, &query, Algorithm::BellmanFord, |graph| {
        BellmanFord::new(graph).table(required(&query.start, "start")?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_code(&Error::VertexNotFound("Z".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_code(&Error::ParseError("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_code(&Error::DisconnectedGraph {
                visited: 1,
                total: 2
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_code(&Error::NegativeCycle("A".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_query_defaults() {
        let query: AlgorithmQuery =
            serde_json::from_value(serde_json::json!({"startingVertexName": "A"})).unwrap();
        assert!(!query.directed);
        assert_eq!(required(&query.starting_vertex_name, "startingVertexName").unwrap(), "A");
        assert!(matches!(
            required(&query.start, "start"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_run_reports_parse_errors() {
        let query = AlgorithmQuery::default();
        let result = run(
            "{not json",
            &query,
            Algorithm::Kruskal,
            |graph| Ok(kruskal(graph).total_weight),
        );
        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
