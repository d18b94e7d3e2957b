use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("SQLite error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let error = StoreError::ConnectionError("failed to connect".to_string());
        assert_eq!(format!("{}", error), "Connection error: failed to connect");
    }

    #[test]
    fn test_operation_error_display() {
        let error = StoreError::OperationError("disk full".to_string());
        assert_eq!(format!("{}", error), "Operation error: disk full");
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let error: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, StoreError::SqlxError(_)));
        assert!(format!("{}", error).starts_with("SQLite error: "));
    }
}
