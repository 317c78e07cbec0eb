/// Error code registry for csv-pivot
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Input/output errors
/// - 4000-4999: Execution errors
/// - 5000-5999: Precondition violations from upstream collaborators
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Input/output errors (3000-3999)
    pub const IO_GENERIC: u16 = 3000;
    pub const IO_READ_FAILED: u16 = 3001;
    pub const IO_WRITE_FAILED: u16 = 3002;
    pub const IO_SERIALIZATION_ERROR: u16 = 3003;

    // Execution errors (4000-4999)
    pub const EXEC_GENERIC: u16 = 4000;
    pub const EXEC_TASK_FAILED: u16 = 4001;
    pub const EXEC_SEMAPHORE_CLOSED: u16 = 4002;

    // Precondition violations (5000-5999)
    pub const PRECONDITION_EMPTY_GROUP: u16 = 5001;
    pub const PRECONDITION_DUPLICATE_ROW: u16 = 5002;
    pub const PRECONDITION_ROW_OUT_OF_RANGE: u16 = 5003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",

        // Input/output errors
        3000 => "Generic input/output error",
        3001 => "Failed to read input",
        3002 => "Failed to write output",
        3003 => "Failed to serialize output",

        // Execution errors
        4000 => "Generic execution error",
        4001 => "Pipeline task failed to complete",
        4002 => "Concurrency limiter was closed",

        // Precondition violations
        5001 => "Group reached the reducer without members",
        5002 => "Group carries two cells for the same row",
        5003 => "Cell row index exceeds the configured row count",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_descriptions() {
        for code in [
            ErrorCode::CONFIG_GENERIC,
            ErrorCode::CONFIG_PARSE_ERROR,
            ErrorCode::IO_READ_FAILED,
            ErrorCode::EXEC_TASK_FAILED,
            ErrorCode::PRECONDITION_EMPTY_GROUP,
            ErrorCode::PRECONDITION_DUPLICATE_ROW,
            ErrorCode::PRECONDITION_ROW_OUT_OF_RANGE,
        ] {
            assert_ne!(describe_error_code(code), "Unknown error code");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(42), "Unknown error code");
    }
}
