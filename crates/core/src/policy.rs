//! Bucket policy documents
//!
//! Only the anonymous public-read policy is supported: one statement that
//! allows `s3:GetObject` for principal `*` on every object in the bucket.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// IAM policy language version
pub const POLICY_VERSION: &str = "2012-10-17";

/// A bucket policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketPolicy {
    pub version: String,
    pub statement: Vec<Statement>,
}

/// A single policy statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub sid: String,
    pub effect: String,
    pub principal: String,
    pub action: Vec<String>,
    pub resource: String,
}

impl BucketPolicy {
    /// Policy granting anonymous read access to every object in `bucket`
    pub fn public_read(bucket: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                sid: "AddPerm".to_string(),
                effect: "Allow".to_string(),
                principal: "*".to_string(),
                action: vec!["s3:GetObject".to_string()],
                resource: format!("arn:aws:s3:::{bucket}/*"),
            }],
        }
    }

    /// Serialize to the JSON text sent with PutBucketPolicy
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
