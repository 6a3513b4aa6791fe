//! CLI-specific error types
//!
//! All CLI errors are fatal: the process reports the failure and exits
//! non-zero without writing a destination image.

use std::fmt;

use crate::image::ImageError;
use crate::planner::PlannerError;
use crate::query::ParseError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Query failed to parse
    BadQuery,
    /// Query could not be planned against the image
    BadPlan,
    /// Image decode/encode failure
    ImageError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadQuery => "PXS_CLI_BAD_QUERY",
            Self::BadPlan => "PXS_CLI_BAD_PLAN",
            Self::ImageError => "PXS_CLI_IMAGE_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::new(CliErrorCode::BadQuery, err.to_string())
    }
}

impl From<PlannerError> for CliError {
    fn from(err: PlannerError) -> Self {
        Self::new(CliErrorCode::BadPlan, err.to_string())
    }
}

impl From<ImageError> for CliError {
    fn from(err: ImageError) -> Self {
        Self::new(CliErrorCode::ImageError, err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_maps_to_bad_query() {
        let err: CliError = crate::query::parse("NONSENSE").unwrap_err().into();
        assert_eq!(err.code(), CliErrorCode::BadQuery);
        assert!(err.message().contains("PXS_QUERY_UNEXPECTED_TOKEN"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = CliError::new(CliErrorCode::ImageError, "unreadable");
        assert_eq!(format!("{}", err), "[PXS_CLI_IMAGE_ERROR] unreadable");
    }
}
