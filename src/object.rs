//! File object operations / 文件对象操作
//!
//! The six public actions: upload/update, move, signed URL, public URL,
//! remove, list. Each call is one linear pass of build request → execute →
//! decode; nothing is retained between calls, and every header an operation
//! decides is attached to its own request, so concurrent calls cannot
//! interfere through shared state.

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Body, Method, Request};
use serde_json::json;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::client::StorageClient;
use crate::errors::{Result, StorageError};
use crate::types::{
    FileObject, FileSearchOptions, FileUploadResponse, SignedUrlResponse, UploadOptions,
    DEFAULT_CACHE_CONTROL, DEFAULT_CONTENT_TYPE,
};
use crate::util::normalize_object_key;

impl StorageClient {
    /// Upload a new object with default options / 以默认选项上传新对象
    pub async fn upload_file<R>(
        &self,
        bucket_id: &str,
        relative_path: &str,
        data: R,
    ) -> Result<FileUploadResponse>
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        self.upload_or_update_file(bucket_id, relative_path, data, false, UploadOptions::default())
            .await
    }

    /// Overwrite an existing object with default options / 以默认选项更新已有对象
    pub async fn update_file<R>(
        &self,
        bucket_id: &str,
        relative_path: &str,
        data: R,
    ) -> Result<FileUploadResponse>
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        self.upload_or_update_file(bucket_id, relative_path, data, true, UploadOptions::default())
            .await
    }

    /// Upload (POST) or update (PUT) an object, streaming the body from the
    /// reader without buffering it / 上传或更新对象，流式发送请求体
    pub async fn upload_or_update_file<R>(
        &self,
        bucket_id: &str,
        relative_path: &str,
        data: R,
        update: bool,
        options: UploadOptions,
    ) -> Result<FileUploadResponse>
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        let body = Body::wrap_stream(ReaderStream::new(data));
        let request = self.build_upload_request(bucket_id, relative_path, body, update, &options)?;
        let (mut response, raw) = self.send::<FileUploadResponse>(request).await?;
        response.data = raw;
        Ok(response)
    }

    /// Build the upload/update request. Every header decision lives here, on
    /// the per-request header set; the shared transport is never mutated.
    fn build_upload_request(
        &self,
        bucket_id: &str,
        relative_path: &str,
        body: Body,
        update: bool,
        options: &UploadOptions,
    ) -> Result<Request> {
        let key = normalize_object_key(&format!("{}/{}", bucket_id, relative_path));
        let method = if update { Method::PUT } else { Method::POST };

        let mut req = self.request(method, &format!("/object/{}", key));

        // Update semantics already overwrite; x-upsert only applies on create.
        if !update {
            req = req.header("x-upsert", options.upsert.to_string());
        }

        let content_type = options
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE);
        req = req.header(CONTENT_TYPE, content_type);

        let cache_control = match options.cache_control_max_age {
            Some(max_age) => format!("max-age={}", max_age),
            None => DEFAULT_CACHE_CONTROL.to_string(),
        };
        req = req.header(CACHE_CONTROL, cache_control);

        req.body(body)
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))
    }

    /// Move an object to a new key within a bucket / 在桶内移动对象
    pub async fn move_file(
        &self,
        bucket_id: &str,
        source_key: &str,
        destination_key: &str,
    ) -> Result<FileUploadResponse> {
        let request = self
            .request(Method::POST, "/object/move")
            .json(&json!({
                "bucketId": bucket_id,
                "sourceKey": source_key,
                "destinationKey": destination_key,
            }))
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))?;

        let (response, _) = self.send::<FileUploadResponse>(request).await?;
        Ok(response)
    }

    /// Create a time-limited signed URL for an object / 为对象创建限时签名链接
    ///
    /// The returned URL is absolute: the service replies with a path-relative
    /// URL and this call prefixes the base URL before returning it.
    pub async fn create_signed_url(
        &self,
        bucket_id: &str,
        file_path: &str,
        expires_in: u64,
    ) -> Result<SignedUrlResponse> {
        let request = self
            .request(
                Method::POST,
                &format!("/object/sign/{}/{}", bucket_id, file_path),
            )
            .json(&json!({ "expiresIn": expires_in }))
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))?;

        let (response, _) = self.send::<SignedUrlResponse>(request).await?;
        Ok(response.into_absolute(self.base_url()))
    }

    /// Public URL of an object in a public bucket; pure construction, no
    /// network call / 公开对象的访问链接，纯构造不发请求
    pub fn get_public_url(&self, bucket_id: &str, file_path: &str) -> SignedUrlResponse {
        SignedUrlResponse {
            signed_url: format!(
                "{}/object/public/{}/{}",
                self.base_url(),
                bucket_id,
                file_path
            ),
        }
    }

    /// Delete objects under the given path prefixes / 删除指定前缀下的对象
    ///
    /// The delete endpoint's shape differs from upload's, so the verbatim
    /// body is kept in `data` alongside the parsed fields.
    pub async fn remove_file(
        &self,
        bucket_id: &str,
        prefixes: &[String],
    ) -> Result<FileUploadResponse> {
        let request = self
            .request(Method::DELETE, &format!("/object/{}", bucket_id))
            .json(&json!({ "prefixes": prefixes }))
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))?;

        let (mut response, raw) = self.send::<FileUploadResponse>(request).await?;
        response.data = raw;
        Ok(response)
    }

    /// List objects under a prefix / 列出指定前缀下的对象
    ///
    /// Results come back in the order the service returns them; the sort
    /// options are a hint forwarded to the service, not enforced here.
    pub async fn list_files(
        &self,
        bucket_id: &str,
        query_prefix: &str,
        options: FileSearchOptions,
    ) -> Result<Vec<FileObject>> {
        let body = options.into_request_body(query_prefix);
        let request = self
            .request(Method::POST, &format!("/object/list/{}", bucket_id))
            .json(&body)
            .build()
            .map_err(|e| StorageError::Construction(e.to_string()))?;

        let (response, _) = self.send::<Vec<FileObject>>(request).await?;
        Ok(response)
    }
}
