//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from sbm-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use tokio::io::AsyncWriteExt;

use sbm_core::{
    BucketInfo, DEFAULT_REGION, Error, ListResult, ObjectInfo, ObjectStore, Result,
};

use crate::errors::map_sdk_error;

/// Connection settings for the S3 client
///
/// Credentials are not part of this: the SDK's default provider chain
/// (environment, shared profile, IMDS, ...) resolves them.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Region requests are signed for
    pub region: String,

    /// Custom endpoint for S3-compatible services
    pub endpoint_url: Option<String>,

    /// Force path-style bucket addressing
    pub path_style: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            path_style: false,
        }
    }
}

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client, resolving credentials from the environment
    pub async fn new(options: ClientOptions) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(options.region.clone()));

        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(options.path_style)
            .build();

        tracing::debug!(
            region = %options.region,
            endpoint = ?options.endpoint_url,
            path_style = options.path_style,
            "Created S3 client"
        );

        Self::from_conf(s3_config)
    }

    /// Create a client from a prepared SDK configuration
    pub fn from_conf(config: aws_sdk_s3::Config) -> Self {
        Self {
            inner: aws_sdk_s3::Client::from_conf(config),
        }
    }
}

/// Bucket configuration for a create-bucket request in `region`
///
/// The provider default region must not carry a location constraint; every
/// other region is sent verbatim.
pub fn bucket_configuration(region: &str) -> Option<CreateBucketConfiguration> {
    if region == DEFAULT_REGION {
        return None;
    }

    Some(
        CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build(),
    )
}

/// Stream an object body into `file`
///
/// Failures reading the body are network errors; failures writing the local
/// file stay `Error::Io`.
async fn write_body<W>(
    mut body: ByteStream,
    file: &mut W,
    bucket: &str,
    key: &str,
) -> Result<u64>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    let mut copied = 0u64;
    loop {
        let chunk = body.try_next().await.map_err(|e| {
            Error::Network(format!("Download '{bucket}/{key}' interrupted: {e}"))
        })?;
        let Some(chunk) = chunk else { break };
        file.write_all(&chunk).await?;
        copied += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(copied)
}

fn to_timestamp(dt: &aws_smithy_types::DateTime) -> Option<jiff::Timestamp> {
    jiff::Timestamp::new(dt.secs(), dt.subsec_nanos() as i32).ok()
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        tracing::debug!("ListBuckets");
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "List buckets"))?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| BucketInfo {
                name: b.name().unwrap_or_default().to_string(),
                creation_date: b.creation_date().and_then(to_timestamp),
            })
            .collect();

        Ok(buckets)
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        tracing::debug!(bucket, region, "CreateBucket");
        self.inner
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(bucket_configuration(region))
            .customize()
            .config_override(
                aws_sdk_s3::config::Builder::default().region(Region::new(region.to_string())),
            )
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Create bucket '{bucket}'")))?;

        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        tracing::debug!(bucket, "DeleteBucket");
        self.inner
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Delete bucket '{bucket}'")))?;

        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<ListResult> {
        tracing::debug!(bucket, token = ?continuation_token, "ListObjectsV2");
        let response = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("List objects in '{bucket}'")))?;

        let items = response
            .contents()
            .iter()
            .map(|object| {
                let mut info =
                    ObjectInfo::new(object.key().unwrap_or_default(), object.size().unwrap_or(0));
                info.last_modified = object.last_modified().and_then(to_timestamp);
                info.etag = object.e_tag().map(|etag| etag.trim_matches('"').to_string());
                info
            })
            .collect();

        Ok(ListResult {
            items,
            truncated: response.is_truncated().unwrap_or(false),
            continuation_token: response.next_continuation_token().map(|s| s.to_string()),
        })
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        tracing::debug!(bucket, key, "DeleteObject");
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Delete '{bucket}/{key}'")))?;

        Ok(())
    }

    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<ObjectInfo> {
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.is_dir() {
            return Err(Error::InvalidInput(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        let body = ByteStream::from_path(path).await.map_err(|e| {
            Error::General(format!("Failed to read {}: {e}", path.display()))
        })?;

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body);

        if let Some(mime) = mime_guess::from_path(path).first() {
            request = request.content_type(mime.essence_str());
        }

        tracing::debug!(bucket, key, size = metadata.len(), "PutObject");
        let response = request
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Upload to '{bucket}/{key}'")))?;

        let mut info = ObjectInfo::new(key, metadata.len() as i64);
        info.etag = response.e_tag().map(|etag| etag.trim_matches('"').to_string());
        info.last_modified = Some(jiff::Timestamp::now());

        Ok(info)
    }

    async fn download_file(&self, bucket: &str, key: &str, path: &Path) -> Result<u64> {
        tracing::debug!(bucket, key, "GetObject");
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Download '{bucket}/{key}'")))?;

        let mut file = tokio::fs::File::create(path).await?;
        let copied = match write_body(response.body, &mut file, bucket, key).await {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(path).await;
                return Err(e);
            }
        };

        Ok(copied)
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        tracing::debug!(bucket, "PutBucketPolicy");
        self.inner
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Set policy on '{bucket}'")))?;

        Ok(())
    }
}
