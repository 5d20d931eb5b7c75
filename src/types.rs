//! Wire data types / 线路数据类型
//!
//! JSON field names are fixed by the service contract and case-sensitive
//! (`Key`, `signedURL`, `bucket_id`, `sortBy`, ...); renames below reproduce
//! them exactly.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_SORT_COLUMN: &str = "name";
pub const DEFAULT_CACHE_CONTROL: &str = "3600";
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Sort direction forwarded to the service / 转发给服务端的排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Sort column and direction for listing / 列表排序配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortBy {
    pub column: String,
    pub order: SortOrder,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            column: DEFAULT_SORT_COLUMN.to_string(),
            order: SortOrder::Asc,
        }
    }
}

/// Search options for listing objects / 列表查询选项
///
/// `None` fields take the documented defaults (limit 100, offset 0, sort by
/// name ascending); `Some(0)` is sent as an explicit zero.
#[derive(Debug, Clone, Default)]
pub struct FileSearchOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<SortBy>,
}

impl FileSearchOptions {
    /// Fill unset fields with defaults and attach the query prefix,
    /// producing the list request body / 填充默认值并生成列表请求体
    pub fn into_request_body(self, prefix: &str) -> ListFileRequestBody {
        ListFileRequestBody {
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.unwrap_or(DEFAULT_OFFSET),
            sort_by: self.sort_by.unwrap_or_default(),
            prefix: prefix.to_string(),
        }
    }
}

/// Body of the list request / 列表请求体
#[derive(Debug, Clone, Serialize)]
pub struct ListFileRequestBody {
    pub limit: u32,
    pub offset: u32,
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
    pub prefix: String,
}

/// Options for upload/update / 上传与更新选项
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Create-or-replace on the create path; updates never send it
    /// 创建时是否覆盖同名对象，更新请求不携带
    pub upsert: bool,
    /// Defaults to `text/plain;charset=UTF-8` when unset / 默认内容类型
    pub content_type: Option<String>,
    /// Sent as `cache-control: max-age=<n>`; unset falls back to the fixed
    /// default `3600` / 缓存时长，未设置时回退到固定默认值
    pub cache_control_max_age: Option<u64>,
}

/// Response of upload/update/move/remove / 上传、移动、删除的响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileUploadResponse {
    #[serde(default, rename = "Key")]
    pub key: String,
    #[serde(default)]
    pub message: String,
    /// Verbatim response body; not every endpoint returns the same shape,
    /// so the untouched payload rides along / 原始响应体
    #[serde(skip)]
    pub data: Bytes,
}

/// Signed or public URL of an object / 对象的签名或公开链接
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignedUrlResponse {
    #[serde(default, rename = "signedURL")]
    pub signed_url: String,
}

impl SignedUrlResponse {
    /// The service returns a path-relative URL; prefix the base URL so the
    /// result is directly usable / 拼接基础地址得到绝对链接
    pub(crate) fn into_absolute(mut self, base_url: &str) -> Self {
        self.signed_url = format!("{}{}", base_url, self.signed_url);
        self
    }
}

/// A stored object as returned by the list endpoint / 列表返回的对象记录
///
/// Timestamps are ISO-8601 strings kept opaque; the service owns their
/// precision and this client does not parse them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bucket_id: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_accessed_at: String,
    /// Backend-defined shape, kept opaque / 后端定义的元数据，保持不透明
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default, rename = "Buckets")]
    pub buckets: Bucket,
}

/// The bucket record embedded in a file object / 对象所属的桶
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bucket {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_resolve_to_defaults() {
        let body = FileSearchOptions::default().into_request_body("");
        assert_eq!(body.limit, 100);
        assert_eq!(body.offset, 0);
        assert_eq!(body.sort_by.column, "name");
        assert_eq!(body.sort_by.order, SortOrder::Asc);
    }

    #[test]
    fn test_set_options_are_preserved() {
        let options = FileSearchOptions {
            limit: Some(5),
            ..Default::default()
        };
        let body = options.into_request_body("folder");
        assert_eq!(body.limit, 5);
        assert_eq!(body.offset, 0);
        assert_eq!(body.sort_by, SortBy::default());
        assert_eq!(body.prefix, "folder");

        let options = FileSearchOptions {
            limit: Some(0),
            offset: Some(7),
            sort_by: Some(SortBy {
                column: "updated_at".to_string(),
                order: SortOrder::Desc,
            }),
        };
        let body = options.into_request_body("");
        assert_eq!(body.limit, 0);
        assert_eq!(body.offset, 7);
        assert_eq!(body.sort_by.column, "updated_at");
        assert_eq!(body.sort_by.order, SortOrder::Desc);
    }

    #[test]
    fn test_list_body_wire_names() {
        let body = FileSearchOptions::default().into_request_body("docs");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "limit": 100,
                "offset": 0,
                "sortBy": {"column": "name", "order": "asc"},
                "prefix": "docs",
            })
        );
    }

    #[test]
    fn test_file_object_decode() {
        let body = r#"[{
            "name": "a.txt",
            "bucket_id": "avatars",
            "owner": "u1",
            "id": "0a1",
            "updated_at": "2024-01-02T03:04:05.000Z",
            "created_at": "2024-01-01T00:00:00.000Z",
            "last_accessed_at": "2024-01-03T00:00:00.000Z",
            "metadata": {"size": 42}
        }]"#;
        let objects: Vec<FileObject> = serde_json::from_str(body).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].name, "a.txt");
        assert_eq!(objects[0].bucket_id, "avatars");
        assert_eq!(objects[0].last_accessed_at, "2024-01-03T00:00:00.000Z");
        assert_eq!(objects[0].metadata.as_ref().unwrap()["size"], 42);
    }

    #[test]
    fn test_upload_response_decode() {
        let resp: FileUploadResponse =
            serde_json::from_str(r#"{"Key": "b/p.txt", "message": "ok"}"#).unwrap();
        assert_eq!(resp.key, "b/p.txt");
        assert_eq!(resp.message, "ok");
        assert!(resp.data.is_empty());

        // 字段缺失时回退到默认值
        let resp: FileUploadResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.key, "");
        assert_eq!(resp.message, "");
    }
}
