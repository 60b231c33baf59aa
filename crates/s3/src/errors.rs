//! SDK error classification
//!
//! S3 reports failures as service error codes. These are folded into the
//! sbm-core error categories so callers never see SDK types.

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use sbm_core::Error;

/// Convert an SDK error into an sbm-core error, prefixing `context`
pub(crate) fn map_sdk_error<E, R>(err: SdkError<E, R>, context: &str) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) {
        return Error::Network(format!("{context}: {}", DisplayErrorContext(&err)));
    }

    let (code, detail) = match err.as_service_error() {
        Some(service) => {
            let code = service.code().map(str::to_string);
            let detail = match (service.code(), service.message()) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (Some(code), None) => code.to_string(),
                _ => DisplayErrorContext(&err).to_string(),
            };
            (code, detail)
        }
        None => (None, DisplayErrorContext(&err).to_string()),
    };

    classify_code(code.as_deref(), format!("{context}: {detail}"))
}

/// Map an S3 error code onto an error category
pub(crate) fn classify_code(code: Option<&str>, message: String) -> Error {
    match code {
        Some("NoSuchBucket" | "NoSuchKey" | "NotFound" | "NoSuchBucketPolicy") => {
            Error::NotFound(message)
        }
        Some(
            "AccessDenied"
            | "AllAccessDisabled"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "ExpiredToken",
        ) => Error::Auth(message),
        Some(
            "BucketAlreadyExists"
            | "BucketAlreadyOwnedByYou"
            | "BucketNotEmpty"
            | "OperationAborted",
        ) => Error::Conflict(message),
        Some("RequestTimeout" | "SlowDown" | "ServiceUnavailable" | "InternalError") => {
            Error::Network(message)
        }
        _ => Error::General(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify_code(Some("NoSuchBucket"), "gone".into());
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_classify_auth() {
        assert!(matches!(
            classify_code(Some("AccessDenied"), "no".into()),
            Error::Auth(_)
        ));
        assert!(matches!(
            classify_code(Some("InvalidAccessKeyId"), "no".into()),
            Error::Auth(_)
        ));
    }

    #[test]
    fn test_classify_conflict() {
        assert!(matches!(
            classify_code(Some("BucketAlreadyOwnedByYou"), "mine".into()),
            Error::Conflict(_)
        ));
        assert!(matches!(
            classify_code(Some("BucketNotEmpty"), "full".into()),
            Error::Conflict(_)
        ));
    }

    #[test]
    fn test_classify_unknown_is_general() {
        let err = classify_code(Some("MalformedPolicy"), "Create bucket: bad".into());
        assert!(matches!(err, Error::General(_)));
        assert_eq!(err.to_string(), "Create bucket: bad");

        assert!(matches!(classify_code(None, "?".into()), Error::General(_)));
    }
}
