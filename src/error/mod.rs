use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for csv-pivot
///
/// The transform functions themselves never fail. Everything here comes
/// from the ambient layers (configuration, I/O, task execution) or from a
/// collaborator handing the reducer input that breaks the grouping contract.
#[derive(Error, Debug)]
pub enum PivotError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] I/O error: {message}")]
    Io {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Execution error: {message}")]
    Execution {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Precondition violated: {message}")]
    Precondition {
        code: u16,
        message: String,
        key: usize,
        row: Option<usize>,
    },
}

impl PivotError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an I/O error with default code
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            code: ErrorCode::IO_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an I/O error with specific code and path
    pub fn io_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an execution error with specific code
    pub fn execution_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Execution {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// A group with no members reached the reducer
    pub fn empty_group(key: usize) -> Self {
        Self::Precondition {
            code: ErrorCode::PRECONDITION_EMPTY_GROUP,
            message: format!("group for column {} has no members", key),
            key,
            row: None,
        }
    }

    /// Two members of one group claim the same original row
    pub fn duplicate_row(key: usize, row: usize) -> Self {
        Self::Precondition {
            code: ErrorCode::PRECONDITION_DUPLICATE_ROW,
            message: format!("group for column {} has more than one cell for row {}", key, row),
            key,
            row: Some(row),
        }
    }

    /// A member's row index does not fit the explicitly configured row count
    pub fn row_out_of_range(key: usize, row: usize, total_rows: usize) -> Self {
        Self::Precondition {
            code: ErrorCode::PRECONDITION_ROW_OUT_OF_RANGE,
            message: format!(
                "group for column {} has a cell for row {} but the table has {} rows",
                key, row, total_rows
            ),
            key,
            row: Some(row),
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Io { source: src, .. }
            | Self::Execution { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Precondition { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Execution { message, .. }
            | Self::Precondition { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Execution { .. } => 4,
            Self::Precondition { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Io { code, .. }
            | Self::Execution { code, .. }
            | Self::Precondition { code, .. } => *code,
        }
    }

    /// Whether the error points at a defect in an upstream collaborator
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }

    /// Human-readable description of the error code
    pub fn describe(&self) -> &'static str {
        describe_error_code(self.code())
    }
}

impl From<std::io::Error> for PivotError {
    fn from(err: std::io::Error) -> Self {
        PivotError::io(err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for PivotError {
    fn from(err: serde_json::Error) -> Self {
        PivotError::io_with_code(
            ErrorCode::IO_SERIALIZATION_ERROR,
            format!("JSON serialization failed: {}", err),
            None,
        )
        .with_source(err)
    }
}

impl From<toml::de::Error> for PivotError {
    fn from(err: toml::de::Error) -> Self {
        PivotError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            format!("invalid TOML: {}", err),
            None,
        )
        .with_source(err)
    }
}

impl From<tokio::task::JoinError> for PivotError {
    fn from(err: tokio::task::JoinError) -> Self {
        PivotError::execution_with_code(ErrorCode::EXEC_TASK_FAILED, err.to_string())
            .with_source(err)
    }
}

pub type Result<T> = std::result::Result<T, PivotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_padded_code() {
        let err = PivotError::empty_group(3);
        assert_eq!(
            err.to_string(),
            "[E5001] Precondition violated: group for column 3 has no members"
        );
    }

    #[test]
    fn test_precondition_errors_carry_location() {
        match PivotError::duplicate_row(2, 7) {
            PivotError::Precondition { key, row, code, .. } => {
                assert_eq!(key, 2);
                assert_eq!(row, Some(7));
                assert_eq!(code, ErrorCode::PRECONDITION_DUPLICATE_ROW);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(PivotError::row_out_of_range(0, 9, 4).is_precondition());
        assert!(!PivotError::config("bad").is_precondition());
    }

    #[test]
    fn test_with_context_appends() {
        let err = PivotError::config("max_parallel must be at least 1").with_context("config.toml");
        assert!(err
            .to_string()
            .ends_with("max_parallel must be at least 1: config.toml"));
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: PivotError = io.into();
        assert_eq!(err.code(), ErrorCode::IO_GENERIC);
        assert_eq!(err.exit_code(), 3);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_toml_conversion_is_config_error() {
        let parse = toml::from_str::<toml::Table>("max_parallel = ").unwrap_err();
        let err: PivotError = parse.into();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
        assert_eq!(err.describe(), "Failed to parse configuration");
    }

    #[test]
    fn test_exit_code_by_category() {
        assert_eq!(PivotError::config("bad").exit_code(), 2);
        assert_eq!(PivotError::io("gone").exit_code(), 3);
        assert_eq!(
            PivotError::execution_with_code(ErrorCode::EXEC_TASK_FAILED, "join").exit_code(),
            4
        );
        assert_eq!(PivotError::empty_group(0).exit_code(), 5);
    }

    #[test]
    fn test_json_conversion_is_io_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PivotError = parse.into();
        assert_eq!(err.code(), ErrorCode::IO_SERIALIZATION_ERROR);
        assert_eq!(err.exit_code(), 3);
    }
}
