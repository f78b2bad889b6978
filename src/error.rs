//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the DupeSieve application.
///
/// - 0: Success (completed normally, duplicates found / results matched)
/// - 1: General error (unexpected failure)
/// - 2: No duplicates found (completed normally, no duplicates)
/// - 3: Mismatch (verify results differ, or compared files differ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Operation completed and duplicates were found or results matched.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// No duplicates: Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Mismatch: Verification or comparison found differing results.
    Mismatch = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::NoDuplicates => "DS002",
            Self::Mismatch => "DS003",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoDuplicates.as_i32(), 2);
        assert_eq!(ExitCode::Mismatch.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "DS000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "DS001");
        assert_eq!(ExitCode::NoDuplicates.code_prefix(), "DS002");
        assert_eq!(ExitCode::Mismatch.code_prefix(), "DS003");
    }

    #[test]
    fn test_structured_error_fields() {
        let err = anyhow::anyhow!("something broke");
        let structured = StructuredError::new(&err, ExitCode::GeneralError);

        assert_eq!(structured.code, "DS001");
        assert_eq!(structured.exit_code, 1);
        assert_eq!(structured.message, "something broke");
    }
}
