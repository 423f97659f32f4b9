//! Centralized error handling for subword motions
//! Defines the error type, categories and error codes

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Unknown motion or text-object key
    Parse,
    /// Option names or values that cannot be applied
    Settings,
    /// Malformed pattern candidates
    Pattern,
    /// Positions or line indices outside the buffer
    Input,
    /// File system or I/O errors
    Io,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "Parse"),
            Self::Settings => write!(f, "Settings"),
            Self::Pattern => write!(f, "Pattern"),
            Self::Input => write!(f, "Input"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// A structured error raised before any position is computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubwordError {
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "UNKNOWN_MOTION")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl SubwordError {
    /// Create a new error
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a line index that the buffer does not have
    pub fn line_out_of_range(line: usize, line_count: usize) -> Self {
        Self::new(
            ErrorType::Input,
            "LINE_OUT_OF_RANGE",
            format!("line {line} is outside the buffer (1..={line_count})"),
        )
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for SubwordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for SubwordError {}

impl From<std::io::Error> for SubwordError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, "IO_ERROR", err.to_string())
    }
}

impl From<regex::Error> for SubwordError {
    fn from(err: regex::Error) -> Self {
        Self::new(ErrorType::Pattern, "INVALID_PATTERN", err.to_string())
    }
}

/// Result alias for subword operations
pub type Result<T> = std::result::Result<T, SubwordError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
