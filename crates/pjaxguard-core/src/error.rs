//! Shared error type across pjaxguard crates.

use thiserror::Error;

/// Stable error codes (logs, tests, response mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A guarded action was invoked outside pjax and its policy says fail.
    ActionRejected,
    /// Configuration failed to parse or validate.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ActionRejected => "ACTION_REJECTED",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Terminal for the current request; carries the HTTP status to answer with.
    #[error("action rejected ({code}): {message}")]
    ActionRejected { code: u16, message: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GuardError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GuardError::ActionRejected { .. } => ErrorCode::ActionRejected,
            GuardError::BadConfig(_) => ErrorCode::BadConfig,
            GuardError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            GuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
