//! Planner error types
//!
//! Error codes:
//! - PXS_PLAN_UNSUPPORTED_CHANNELS (REJECT)
//! - PXS_PLAN_INVALID_RUN_LENGTH (REJECT)
//!
//! Planner errors are configuration errors: they are raised before any
//! pixel work begins and are terminal for the whole pipeline.

use std::fmt;

/// Planner error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerErrorCode {
    /// Image channel count is not 3
    UnsupportedChannels,
    /// Fixed run length below 1
    InvalidRunLength,
}

impl PlannerErrorCode {
    /// Returns the string code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            PlannerErrorCode::UnsupportedChannels => "PXS_PLAN_UNSUPPORTED_CHANNELS",
            PlannerErrorCode::InvalidRunLength => "PXS_PLAN_INVALID_RUN_LENGTH",
        }
    }
}

impl fmt::Display for PlannerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Planner error with the step that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerError {
    code: PlannerErrorCode,
    message: String,
    /// Zero-based index of the offending step
    step: usize,
}

impl PlannerError {
    /// Unsupported channel count.
    pub fn unsupported_channels(step: usize, found: usize) -> Self {
        Self {
            code: PlannerErrorCode::UnsupportedChannels,
            message: format!("Engine requires 3-channel images, found {} channels", found),
            step,
        }
    }

    /// Fixed run length below 1.
    pub fn invalid_run_length(step: usize) -> Self {
        Self {
            code: PlannerErrorCode::InvalidRunLength,
            message: "Fixed run length must be at least 1".into(),
            step,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> PlannerErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the zero-based index of the step that failed to plan.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (step {})",
            self.code.code(),
            self.message,
            self.step
        )
    }
}

impl std::error::Error for PlannerError {}

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PlannerErrorCode::UnsupportedChannels.code(),
            "PXS_PLAN_UNSUPPORTED_CHANNELS"
        );
        assert_eq!(
            PlannerErrorCode::InvalidRunLength.code(),
            "PXS_PLAN_INVALID_RUN_LENGTH"
        );
    }

    #[test]
    fn test_error_display_names_step() {
        let err = PlannerError::unsupported_channels(2, 4);
        let display = format!("{}", err);
        assert!(display.contains("PXS_PLAN_UNSUPPORTED_CHANNELS"));
        assert!(display.contains("4 channels"));
        assert!(display.contains("step 2"));
    }
}
