//! Client error types / 客户端错误类型

use bytes::Bytes;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Failure returned by a storage operation / 存储操作返回的失败
///
/// Every operation resolves to exactly one of a success value or one of these
/// variants; construction and transport failures are ordinary recoverable
/// outcomes, never panics.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The outbound request could not be built / 无法构造出站请求
    #[error("failed to build request: {0}")]
    Construction(String),

    /// The transport could not complete the round trip / 传输层往返失败
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body did not decode into the expected shape / 响应体解析失败
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// The raw body that failed to decode / 未能解析的原始响应体
        body: Bytes,
    },
}

impl From<reqwest::header::InvalidHeaderValue> for StorageError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        StorageError::Construction(err.to_string())
    }
}
