//! Bucket name and object key handling
//!
//! Bucket names are checked before any request is sent. Object keys for
//! uploads fall back to the base name of the local file.

use std::path::Path;

use crate::error::{Error, Result};

/// Minimum bucket name length accepted by S3
const MIN_BUCKET_LEN: usize = 3;

/// Maximum bucket name length accepted by S3
const MAX_BUCKET_LEN: usize = 63;

/// Validate a bucket name against the S3 naming rules
///
/// Names are 3-63 characters of lowercase letters, digits, `.` and `-`,
/// beginning and ending with a letter or digit.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidInput("Bucket name cannot be empty".into()));
    }

    if name.len() < MIN_BUCKET_LEN || name.len() > MAX_BUCKET_LEN {
        return Err(Error::InvalidInput(format!(
            "Bucket name '{name}' must be between {MIN_BUCKET_LEN} and {MAX_BUCKET_LEN} characters"
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '-'))
    {
        return Err(Error::InvalidInput(format!(
            "Bucket name '{name}' contains invalid character '{c}'"
        )));
    }

    let edge_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !edge_ok(name.chars().next()) || !edge_ok(name.chars().last()) {
        return Err(Error::InvalidInput(format!(
            "Bucket name '{name}' must begin and end with a letter or digit"
        )));
    }

    Ok(())
}

/// Derive an object key from the base name of a local file
pub fn default_object_key(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Cannot derive an object name from '{}'",
                path.display()
            ))
        })
}

/// Pick the object key for an upload: the explicit key when given, the file's base name otherwise
pub fn resolve_object_key(path: &Path, key: Option<&str>) -> Result<String> {
    match key {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => default_object_key(path),
    }
}
