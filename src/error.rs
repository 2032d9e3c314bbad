//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 按名称（忽略大小写）找不到顶点
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    /// Prim 在仍有未访问顶点时找不到跨越边界的边
    #[error("图不连通: 已访问 {visited} / {total} 个顶点")]
    DisconnectedGraph { visited: usize, total: usize },

    /// 存在可从源点到达的负权环，本次计算得到的距离无效
    #[error("检测到负权环 (经过顶点 {0})")]
    NegativeCycle(String),

    /// 构图阶段的结构校验失败
    #[error("图校验失败: {0}")]
    Validation(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("服务器错误: {0}")]
    ServerError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            Error::ParseError(e.to_string())
        } else {
            Error::SerializationError(e.to_string())
        }
    }
}
