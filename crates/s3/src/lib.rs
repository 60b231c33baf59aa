//! sbm-s3: S3 SDK adapter for sbm
//!
//! This crate provides the implementation of the ObjectStore trait
//! using the aws-sdk-s3 crate. It is the only crate that directly
//! depends on the AWS SDK.

pub mod client;
mod errors;

pub use client::{ClientOptions, S3Client, bucket_configuration};
