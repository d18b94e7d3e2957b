use thiserror::Error;
use crate::store::errors::StoreError;

/// Every variant terminates the request and its message becomes the
/// `failure reason` of the reply.
#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error("{0}")]
    ParseError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("too early to update")]
    ThrottleRejection,

    #[error("{0}")]
    StoreError(#[from] StoreError),

    #[error("{0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_rejection_display() {
        assert_eq!(AnnounceError::ThrottleRejection.to_string(), "too early to update");
    }

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(AnnounceError::ParseError(String::from("invalid port")).to_string(), "invalid port");
        assert_eq!(AnnounceError::ValidationError(String::from("invalid infohash")).to_string(), "invalid infohash");
    }

    #[test]
    fn test_store_error_conversion() {
        let error: AnnounceError = StoreError::OperationError(String::from("disk full")).into();
        assert!(matches!(error, AnnounceError::StoreError(_)));
        assert_eq!(error.to_string(), "Operation error: disk full");
    }
}
