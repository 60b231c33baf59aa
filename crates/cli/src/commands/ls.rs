//! ls command - List buckets
//!
//! Prints every bucket the caller owns.

use comfy_table::{Table, presets};
use sbm_core::{BucketInfo, ObjectStore};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Execute the ls command
pub async fn execute(store: &dyn ObjectStore, formatter: &Formatter) -> ExitCode {
    match store.list_buckets().await {
        Ok(buckets) => {
            tracing::info!(count = buckets.len(), "Listed buckets");
            formatter.println("");
            formatter.heading("Existing buckets:");
            if buckets.is_empty() {
                formatter.println("  (none)");
            } else {
                formatter.println(&render_buckets(&buckets));
            }
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!("Error listing buckets: {e}");
            formatter.error(&format!("Failed to list buckets: {e}"));
            ExitCode::from(&e)
        }
    }
}

/// Render buckets as a borderless name/creation-date table
fn render_buckets(buckets: &[BucketInfo]) -> String {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(vec!["Name", "Created"]);

    for bucket in buckets {
        let created = bucket
            .creation_date
            .map(|ts| ts.strftime("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        table.add_row(vec![bucket.name.clone(), created]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::MockStore;
    use sbm_core::Error;

    #[test]
    fn test_render_buckets_lists_names_and_dates() {
        let buckets = vec![
            BucketInfo {
                name: "alpha".to_string(),
                creation_date: Some(jiff::Timestamp::from_second(0).unwrap()),
            },
            BucketInfo::new("beta"),
        ];

        let rendered = render_buckets(&buckets);
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("1970-01-01 00:00:00"));
        assert!(rendered.contains("beta"));
    }

    #[tokio::test]
    async fn test_list_success() {
        let mut store = MockStore::new();
        store
            .expect_list_buckets()
            .times(1)
            .returning(|| Ok(vec![BucketInfo::new("alpha")]));

        assert_eq!(execute(&store, &Formatter::default()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_list_provider_fault_is_reported() {
        let mut store = MockStore::new();
        store
            .expect_list_buckets()
            .times(1)
            .returning(|| Err(Error::Auth("InvalidAccessKeyId".into())));

        assert_eq!(execute(&store, &Formatter::default()).await, ExitCode::AuthError);
    }
}
