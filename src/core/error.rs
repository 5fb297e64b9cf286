use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty group: no rows in column '{column}' match level {label}")]
    EmptyGroup { column: String, label: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown resampling method: '{0}' (expected 'bootstrap' or 'permutation')")]
    ResamplingMethodUnknown(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Type error: {0}")]
    Type(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::EmptyGroup {
            column: "dose".to_string(),
            label: "\"C\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Empty group: no rows in column 'dose' match level \"C\""
        );

        let err = Error::ResamplingMethodUnknown("jackknife".to_string());
        assert!(err.to_string().contains("jackknife"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
