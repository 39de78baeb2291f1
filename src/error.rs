//! 错误类型定义

use thiserror::Error;

/// 参考数据（城市/地区）存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 数据加载失败
    #[error("Failed to load reference data: {0}")]
    DataLoad(String),

    /// 字典或城市记录引用了不存在的实体
    #[error("Dangling {kind} reference: id {id} has no record")]
    DanglingReference {
        /// 实体类型（"city" / "region"）
        kind: &'static str,
        /// 缺失的实体 id
        id: u32,
    },

    /// 外部存储不可用
    #[error("Reference store unavailable: {0}")]
    Unavailable(String),
}

/// 地址解析错误
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 无效的输入（空字符串）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 参考数据存储失败，原样透传
    #[error(transparent)]
    Store(#[from] StoreError),
}
