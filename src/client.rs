//! Storage HTTP client / 存储HTTP客户端
//!
//! Holds the pre-configured transport (`reqwest::Client`) and the base URL.
//! The client keeps no state between calls; authentication and timeout policy
//! live in the transport, frozen at construction.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{Result, StorageError};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for a bucket-based object-storage HTTP API / 桶式对象存储API客户端
pub struct StorageClient {
    http: Client,
    base_url: String,
}

impl StorageClient {
    /// Build a client with a bearer token / 使用令牌构建客户端
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))?;

        Ok(Self::from_parts(base_url, http))
    }

    /// Wrap an already configured transport / 使用现成的传输层构建客户端
    pub fn from_parts(base_url: &str, http: Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Execute a request and decode its JSON body, returning the typed value
    /// together with the raw bytes / 发送请求并解析JSON响应
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<(T, Bytes)> {
        debug!(method = %request.method(), url = %request.url(), "sending storage request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(StorageError::Transport)?;
        let body = response.bytes().await.map_err(StorageError::Transport)?;
        let value = decode_json(&body)?;
        Ok((value, body))
    }
}

/// Decode a raw response body, carrying the body along with any failure.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| {
        debug!(len = body.len(), "response body failed to decode");
        StorageError::Decode {
            source,
            body: body.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileUploadResponse;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = StorageClient::from_parts("https://x.test/", Client::new());
        assert_eq!(client.base_url(), "https://x.test");
    }

    #[test]
    fn test_non_json_body_is_a_decode_error() {
        let body = Bytes::from_static(b"<html>gateway error</html>");
        let err = decode_json::<FileUploadResponse>(&body).unwrap_err();
        match err {
            StorageError::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_a_decode_error() {
        // 合法JSON但形状不符
        let body = Bytes::from_static(b"[1, 2, 3]");
        assert!(matches!(
            decode_json::<FileUploadResponse>(&body),
            Err(StorageError::Decode { .. })
        ));
    }
}
