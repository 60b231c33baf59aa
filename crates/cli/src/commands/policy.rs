//! policy command - Make a bucket publicly readable
//!
//! Attaches a policy granting anonymous `s3:GetObject` on every object.

use sbm_core::{BucketPolicy, ObjectStore};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Execute the policy command
pub async fn execute(store: &dyn ObjectStore, bucket: &str, formatter: &Formatter) -> ExitCode {
    let policy = match BucketPolicy::public_read(bucket).to_json() {
        Ok(json) => json,
        Err(e) => {
            formatter.error(&format!("Failed to build bucket policy: {e}"));
            return ExitCode::from(&e);
        }
    };

    match store.put_bucket_policy(bucket, &policy).await {
        Ok(()) => {
            tracing::info!(bucket, "Public read policy applied");
            formatter.success(&format!("Public read policy applied to bucket '{bucket}'."));
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(bucket, "Error setting bucket policy: {e}");
            formatter.error(&format!("Failed to set bucket policy: {e}"));
            ExitCode::from(&e)
        }
    }
}
