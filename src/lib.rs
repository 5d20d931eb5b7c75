//! Client binding for a bucket-based object-storage HTTP API.
//! 桶式对象存储HTTP API的客户端绑定
//!
//! Maps file operations (upload/update, move, signed URL, public URL, remove,
//! list) onto HTTP calls and decodes the JSON responses into typed results.
//! The client is stateless between calls; authentication, base URL and
//! timeout policy belong to the transport it wraps.
//!
//! ```no_run
//! use object_storage_client::{FileSearchOptions, StorageClient};
//!
//! # async fn demo() -> object_storage_client::Result<()> {
//! let client = StorageClient::new("https://x.test/storage/v1", "service-key")?;
//! let files = client
//!     .list_files("avatars", "folder", FileSearchOptions::default())
//!     .await?;
//! # let _ = files;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod object;
pub mod types;
pub mod util;

pub use client::StorageClient;
pub use errors::{Result, StorageError};
pub use types::{
    Bucket, FileObject, FileSearchOptions, FileUploadResponse, ListFileRequestBody,
    SignedUrlResponse, SortBy, SortOrder, UploadOptions,
};
pub use util::normalize_object_key;
