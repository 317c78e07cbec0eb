use super::{ErrorCode, PivotError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to PivotError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, PivotError>;
    fn to_io_error(self, message: impl Into<String>) -> Result<T, PivotError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, PivotError> {
        self.map_err(|e| PivotError::config(message).with_source(e))
    }

    fn to_io_error(self, message: impl Into<String>) -> Result<T, PivotError> {
        self.map_err(|e| PivotError::io(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> PivotError {
        PivotError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an error for an input that could not be read
    pub fn input_read_error(path: impl AsRef<Path>) -> PivotError {
        PivotError::io_with_code(
            ErrorCode::IO_READ_FAILED,
            format!("Failed to read input: {}", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an error for an output that could not be written
    pub fn output_write_error(path: impl AsRef<Path>) -> PivotError {
        PivotError::io_with_code(
            ErrorCode::IO_WRITE_FAILED,
            format!("Failed to write output: {}", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }
}
