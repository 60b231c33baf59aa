//! get command - Download an object
//!
//! Streams an object into a local file.

use std::path::PathBuf;

use sbm_core::{Error, ObjectStore};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, ProgressBar};

/// Download an object
#[derive(Debug, Clone)]
pub struct GetArgs {
    /// Source bucket
    pub bucket: String,

    /// Object key
    pub key: String,

    /// Local file to write
    pub file: PathBuf,
}

/// Execute the get command
pub async fn execute(store: &dyn ObjectStore, args: GetArgs, formatter: &Formatter) -> ExitCode {
    if let Err(e) = validate_args(&args) {
        formatter.error(&e.to_string());
        return ExitCode::UsageError;
    }

    let src_display = format!("{}/{}", args.bucket, args.key);
    let dst_display = args.file.display().to_string();

    let spinner = ProgressBar::spinner(
        formatter.config(),
        &format!("Downloading {src_display} -> {dst_display}"),
    );
    let result = store.download_file(&args.bucket, &args.key, &args.file).await;
    spinner.finish_and_clear();

    match result {
        Ok(bytes) => {
            tracing::info!(bucket = %args.bucket, key = %args.key, file = %dst_display, bytes, "File downloaded");
            formatter.success(&format!(
                "File '{src_display}' downloaded as '{dst_display}' ({})",
                humansize::format_size(bytes, humansize::BINARY)
            ));
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(bucket = %args.bucket, key = %args.key, "Error downloading file: {e}");
            formatter.error(&format!("Failed to download {src_display}: {e}"));
            ExitCode::from(&e)
        }
    }
}

fn validate_args(args: &GetArgs) -> sbm_core::Result<()> {
    if args.key.is_empty() {
        return Err(Error::InvalidInput("Object name cannot be empty".into()));
    }
    if args.file.as_os_str().is_empty() {
        return Err(Error::InvalidInput("Local file name cannot be empty".into()));
    }
    Ok(())
}
