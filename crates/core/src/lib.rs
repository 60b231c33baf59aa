//! sbm-core: Core library for the sbm bucket management tool
//!
//! This crate provides the SDK-independent pieces of sbm:
//! - Configuration loading
//! - Bucket name validation and object key derivation
//! - The public-read bucket policy document
//! - ObjectStore trait for provider operations
//!
//! Nothing here depends on the AWS SDK, so actions built on `ObjectStore`
//! can be exercised against a mock.

pub mod config;
pub mod error;
pub mod path;
pub mod policy;
pub mod traits;

pub use config::{ColorMode, Config, ConfigManager, DEFAULT_REGION, EndpointConfig};
pub use error::{Error, Result};
pub use path::{default_object_key, resolve_object_key, validate_bucket_name};
pub use policy::BucketPolicy;
pub use traits::{BucketInfo, ListResult, ObjectInfo, ObjectStore};
