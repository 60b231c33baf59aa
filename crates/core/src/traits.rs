//! ObjectStore trait definition
//!
//! This trait defines the provider operations the bucket actions are built on.
//! It keeps the CLI decoupled from the S3 SDK so actions can run against a mock.

use std::path::Path;

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A bucket as reported by the provider's list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Creation timestamp, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
}

impl BucketInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creation_date: None,
        }
    }
}

/// Metadata for an object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,

    /// Human-readable size
    pub size_human: String,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,

    /// ETag (usually MD5 for single-part uploads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo for an object of the given size
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes: size,
            size_human: humansize::format_size(size.max(0) as u64, humansize::BINARY),
            last_modified: None,
            etag: None,
        }
    }
}

/// One page of an object listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResult {
    /// Listed objects
    pub items: Vec<ObjectInfo>,

    /// Whether the result is truncated (more items available)
    pub truncated: bool,

    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

/// Provider operations used by the bucket actions
///
/// Implemented by the S3 adapter and mocked in tests. Every method maps to
/// exactly one provider request (uploads and downloads stream their body).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all buckets owned by the caller
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// Create a bucket in the given region
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;

    /// Delete an empty bucket
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// List one page of objects, starting after `continuation_token`
    async fn list_objects(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<ListResult>;

    /// Delete a single object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Stream a local file into `bucket/key`
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<ObjectInfo>;

    /// Stream `bucket/key` into a local file, returning the number of bytes written
    async fn download_file(&self, bucket: &str, key: &str, path: &Path) -> Result<u64>;

    /// Replace the bucket policy with the given JSON document
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;
}
