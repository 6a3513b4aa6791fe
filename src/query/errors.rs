//! Query parse error types
//!
//! Error codes:
//! - PXS_QUERY_EMPTY (REJECT)
//! - PXS_QUERY_UNEXPECTED_TOKEN (REJECT)
//! - PXS_QUERY_UNEXPECTED_END (REJECT)
//! - PXS_QUERY_INVALID_PARAMETER (REJECT)
//!
//! Every grammar violation is fatal to the whole query: there is no
//! partial-query execution and no recovery. Errors carry the offending
//! token and its position so the query language stays debuggable.

use std::fmt;

/// Parse error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// Input contained no tokens
    QueryEmpty,
    /// Token did not match the expected grammar position
    UnexpectedToken,
    /// Input ended while a clause was still open
    UnexpectedEnd,
    /// Numeric parameter malformed or out of range
    InvalidParameter,
}

impl ParseErrorCode {
    /// Returns the string code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorCode::QueryEmpty => "PXS_QUERY_EMPTY",
            ParseErrorCode::UnexpectedToken => "PXS_QUERY_UNEXPECTED_TOKEN",
            ParseErrorCode::UnexpectedEnd => "PXS_QUERY_UNEXPECTED_END",
            ParseErrorCode::InvalidParameter => "PXS_QUERY_INVALID_PARAMETER",
        }
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse error with the offending token and its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    code: ParseErrorCode,
    message: String,
    /// Zero-based index of the offending token (or of the missing one)
    position: usize,
    /// The offending token, if the input supplied one
    token: Option<String>,
}

impl ParseError {
    /// Empty query string.
    pub fn empty_query() -> Self {
        Self {
            code: ParseErrorCode::QueryEmpty,
            message: "Query contains no tokens".into(),
            position: 0,
            token: None,
        }
    }

    /// Token mismatch at a grammar position.
    pub fn unexpected_token(
        position: usize,
        found: impl Into<String>,
        expected: &str,
    ) -> Self {
        let found = found.into();
        Self {
            code: ParseErrorCode::UnexpectedToken,
            message: format!("Expected {} but found '{}'", expected, found),
            position,
            token: Some(found),
        }
    }

    /// Input ended before the clause was complete.
    pub fn unexpected_end(position: usize, expected: &str) -> Self {
        Self {
            code: ParseErrorCode::UnexpectedEnd,
            message: format!("Expected {} but the query ended", expected),
            position,
            token: None,
        }
    }

    /// Malformed or out-of-range numeric parameter.
    pub fn invalid_parameter(
        position: usize,
        token: impl Into<String>,
        reason: &str,
    ) -> Self {
        let token = token.into();
        Self {
            code: ParseErrorCode::InvalidParameter,
            message: format!("Invalid parameter '{}': {}", token, reason),
            position,
            token: Some(token),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ParseErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the zero-based token position of the failure.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the offending token, if the input supplied one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (at token {})",
            self.code.code(),
            self.message,
            self.position
        )
    }
}

impl std::error::Error for ParseError {}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
