//! put command - Upload a local file
//!
//! Streams a local file into a bucket. Without an explicit object name the
//! file's base name is used as the key.

use std::path::PathBuf;

use sbm_core::{ObjectStore, resolve_object_key};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, ProgressBar};

/// Upload a file
#[derive(Debug, Clone)]
pub struct PutArgs {
    /// Local file to upload
    pub file: PathBuf,

    /// Destination bucket
    pub bucket: String,

    /// Object key; defaults to the file's base name
    pub key: Option<String>,
}

/// Execute the put command
pub async fn execute(store: &dyn ObjectStore, args: PutArgs, formatter: &Formatter) -> ExitCode {
    let key = match resolve_object_key(&args.file, args.key.as_deref()) {
        Ok(key) => key,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::UsageError;
        }
    };

    let src_display = args.file.display().to_string();
    let dst_display = format!("{}/{key}", args.bucket);

    let spinner = ProgressBar::spinner(
        formatter.config(),
        &format!("Uploading {src_display} -> {dst_display}"),
    );
    let result = store.upload_file(&args.file, &args.bucket, &key).await;
    spinner.finish_and_clear();

    match result {
        Ok(info) => {
            tracing::info!(
                file = %src_display,
                bucket = %args.bucket,
                key = %key,
                etag = info.etag.as_deref().unwrap_or("-"),
                "File uploaded"
            );
            formatter.success(&format!(
                "File '{src_display}' uploaded to '{dst_display}' ({})",
                info.size_human
            ));
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(file = %src_display, bucket = %args.bucket, key = %key, "Error uploading file: {e}");
            formatter.error(&format!("Failed to upload {src_display}: {e}"));
            ExitCode::from(&e)
        }
    }
}
