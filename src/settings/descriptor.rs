//! Setting descriptor types
//! Type definitions for declarative option configuration

use crate::error::{ErrorType, SubwordError};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(usize),
    /// Enum value (canonicalized identifier)
    Enum(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional min/max bounds
    Integer {
        /// Minimum value (inclusive)
        min: Option<usize>,
        /// Maximum value (inclusive)
        max: Option<usize>,
    },
    /// Enum setting with static variant list
    Enum {
        /// Valid enum variants (static string slices)
        variants: &'static [&'static str],
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
    /// Prefix matches more than one option
    Ambiguous { prefix: String, matches: Vec<String> },
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
            SettingError::Ambiguous { prefix, matches } => {
                write!(f, "Ambiguous option '{prefix}': matches {}", matches.join(", "))
            }
        }
    }
}

impl std::error::Error for SettingError {}

impl From<SettingError> for SubwordError {
    fn from(err: SettingError) -> Self {
        let (kind, code) = match &err {
            SettingError::ParseError(_) => (ErrorType::Parse, "SETTING_PARSE_ERROR"),
            SettingError::ValidationError(_) => (ErrorType::Settings, "SETTING_VALIDATION_ERROR"),
            SettingError::UnknownOption(_) => (ErrorType::Settings, "UNKNOWN_SETTING"),
            SettingError::Ambiguous { .. } => (ErrorType::Settings, "AMBIGUOUS_SETTING"),
        };
        SubwordError::new(kind, code, err.to_string())
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor
///
/// Minimal configuration: name, aliases, type, and setter function.
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name (e.g., "multiline")
    pub name: &'static str,
    /// Short aliases (e.g., &["ml"])
    pub aliases: &'static [&'static str],
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
