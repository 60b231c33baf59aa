//! mb command - Make bucket
//!
//! Creates a new bucket in the requested region.

use sbm_core::{ObjectStore, validate_bucket_name};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Create a bucket
#[derive(Debug, Clone)]
pub struct MbArgs {
    /// Bucket name
    pub bucket: String,

    /// Region the bucket is created in
    pub region: String,
}

/// Execute the mb command
pub async fn execute(store: &dyn ObjectStore, args: MbArgs, formatter: &Formatter) -> ExitCode {
    if let Err(e) = validate_bucket_name(&args.bucket) {
        formatter.error(&e.to_string());
        return ExitCode::UsageError;
    }

    match store.create_bucket(&args.bucket, &args.region).await {
        Ok(()) => {
            tracing::info!(bucket = %args.bucket, region = %args.region, "Bucket created");
            formatter.success(&format!(
                "Bucket '{}' created successfully in region '{}'.",
                args.bucket, args.region
            ));
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(bucket = %args.bucket, region = %args.region, "Error creating bucket: {e}");
            formatter.error(&format!("Failed to create bucket: {e}"));
            ExitCode::from(&e)
        }
    }
}
