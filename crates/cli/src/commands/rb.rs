//! rb command - Remove bucket and all contents
//!
//! Enumerates every object in the bucket, deletes them one at a time, then
//! removes the bucket itself.

use sbm_core::{Error, ObjectStore, Result};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, ProgressBar};

/// Execute the rb command
pub async fn execute(store: &dyn ObjectStore, bucket: &str, formatter: &Formatter) -> ExitCode {
    let spinner = ProgressBar::spinner(formatter.config(), &format!("Listing objects in {bucket}"));
    let keys = collect_keys(store, bucket, &spinner, formatter).await;
    spinner.finish_and_clear();

    // Nothing is deleted unless the whole listing succeeded
    let keys = match keys {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!(bucket, "Error listing bucket contents: {e}");
            formatter.error(&format!("Failed to delete bucket '{bucket}': {e}"));
            return ExitCode::from(&e);
        }
    };

    for key in &keys {
        if let Err(e) = store.delete_object(bucket, key).await {
            tracing::error!(bucket, key = %key, "Error deleting object: {e}");
            formatter.error(&format!("Failed to delete bucket '{bucket}': {e}"));
            return ExitCode::from(&e);
        }
        formatter.println(&format!("Deleted {key}"));
    }

    match store.delete_bucket(bucket).await {
        Ok(()) => {
            tracing::info!(bucket, objects = keys.len(), "Bucket and contents deleted");
            formatter.println(&format!("Deleted bucket: {bucket}"));
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(bucket, "Error deleting bucket: {e}");
            formatter.error(&format!("Failed to delete bucket '{bucket}': {e}"));
            ExitCode::from(&e)
        }
    }
}

/// Walk every listing page and return all object keys
async fn collect_keys(
    store: &dyn ObjectStore,
    bucket: &str,
    spinner: &ProgressBar,
    formatter: &Formatter,
) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    let mut token: Option<String> = None;

    loop {
        let page = store.list_objects(bucket, token.clone()).await?;
        for item in page.items {
            tracing::debug!(
                bucket,
                key = %item.key,
                size = item.size_bytes,
                last_modified = ?item.last_modified,
                "Queued for deletion"
            );
            keys.push(item.key);
        }
        spinner.set_message(&format!("Listing objects in {bucket} ({} found)", keys.len()));

        match (page.truncated, page.continuation_token) {
            (true, Some(next)) if token.as_deref() == Some(next.as_str()) => {
                return Err(Error::General(format!(
                    "Listing of '{bucket}' repeated continuation token '{next}'"
                )));
            }
            (true, Some(next)) => token = Some(next),
            (true, None) => {
                tracing::warn!(bucket, "Truncated listing without continuation token");
                formatter.warning(&format!(
                    "Listing of '{bucket}' was truncated without a continuation token; \
                     only {} objects were found",
                    keys.len()
                ));
                break;
            }
            (false, _) => break,
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{MockStore, quiet_formatter};
    use mockall::Sequence;
    use sbm_core::{Error, ListResult, ObjectInfo};

    fn page(keys: &[&str], next: Option<&str>) -> ListResult {
        ListResult {
            items: keys.iter().map(|k| ObjectInfo::new(*k, 1)).collect(),
            truncated: next.is_some(),
            continuation_token: next.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_deletes_each_object_then_bucket() {
        let mut store = MockStore::new();
        let mut seq = Sequence::new();

        store
            .expect_list_objects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(&["a.txt", "dir/b.txt"], None)));
        for key in ["a.txt", "dir/b.txt"] {
            store
                .expect_delete_object()
                .withf(move |bucket, k| bucket == "old-bucket" && k == key)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        store
            .expect_delete_bucket()
            .withf(|bucket| bucket == "old-bucket")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let code = execute(&store, "old-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_empty_bucket_only_deletes_bucket() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .times(1)
            .returning(|_, _| Ok(ListResult::default()));
        store.expect_delete_object().never();
        store.expect_delete_bucket().times(1).returning(|_| Ok(()));

        let code = execute(&store, "empty-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_follows_continuation_tokens() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .withf(|_, token| token.is_none())
            .times(1)
            .returning(|_, _| Ok(page(&["1", "2"], Some("page-2"))));
        store
            .expect_list_objects()
            .withf(|_, token| token.as_deref() == Some("page-2"))
            .times(1)
            .returning(|_, _| Ok(page(&["3"], None)));
        store.expect_delete_object().times(3).returning(|_, _| Ok(()));
        store.expect_delete_bucket().times(1).returning(|_| Ok(()));

        let code = execute(&store, "big-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_repeated_continuation_token_deletes_nothing() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .withf(|_, token| token.is_none())
            .times(1)
            .returning(|_, _| Ok(page(&["1"], Some("same"))));
        store
            .expect_list_objects()
            .withf(|_, token| token.as_deref() == Some("same"))
            .times(1)
            .returning(|_, _| Ok(page(&["1"], Some("same"))));
        store.expect_delete_object().never();
        store.expect_delete_bucket().never();

        let code = execute(&store, "stuck-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::GeneralError);
    }

    #[tokio::test]
    async fn test_truncated_listing_without_token_stops_enumeration() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .times(1)
            .returning(|_, _| {
                Ok(ListResult {
                    items: vec![ObjectInfo::new("only", 1)],
                    truncated: true,
                    continuation_token: None,
                })
            });
        store.expect_delete_object().times(1).returning(|_, _| Ok(()));
        store.expect_delete_bucket().times(1).returning(|_| Ok(()));

        let code = execute(&store, "odd-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_unconventional_bucket_name_reaches_provider() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .withf(|bucket, _| bucket == "Legacy_Bucket")
            .times(1)
            .returning(|_, _| Ok(ListResult::default()));
        store
            .expect_delete_bucket()
            .withf(|bucket| bucket == "Legacy_Bucket")
            .times(1)
            .returning(|_| Ok(()));

        let code = execute(&store, "Legacy_Bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_listing_failure_deletes_nothing() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .times(1)
            .returning(|_, _| Err(Error::NotFound("NoSuchBucket".into())));
        store.expect_delete_object().never();
        store.expect_delete_bucket().never();

        let code = execute(&store, "ghost-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::NotFound);
    }

    #[tokio::test]
    async fn test_second_page_failure_deletes_nothing() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .withf(|_, token| token.is_none())
            .times(1)
            .returning(|_, _| Ok(page(&["1"], Some("page-2"))));
        store
            .expect_list_objects()
            .withf(|_, token| token.is_some())
            .times(1)
            .returning(|_, _| Err(Error::Network("connection reset".into())));
        store.expect_delete_object().never();
        store.expect_delete_bucket().never();

        let code = execute(&store, "big-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_object_delete_failure_keeps_bucket() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .times(1)
            .returning(|_, _| Ok(page(&["a", "b"], None)));
        store
            .expect_delete_object()
            .times(1)
            .returning(|_, _| Err(Error::Auth("AccessDenied".into())));
        store.expect_delete_bucket().never();

        let code = execute(&store, "locked-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::AuthError);
    }

    #[tokio::test]
    async fn test_bucket_delete_failure_is_reported() {
        let mut store = MockStore::new();
        store
            .expect_list_objects()
            .times(1)
            .returning(|_, _| Ok(ListResult::default()));
        store
            .expect_delete_bucket()
            .times(1)
            .returning(|_| Err(Error::Conflict("BucketNotEmpty".into())));

        let code = execute(&store, "racy-bucket", &quiet_formatter()).await;
        assert_eq!(code, ExitCode::Conflict);
    }
}
