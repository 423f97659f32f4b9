//! Motion options
//!
//! Options are a plain value handed to every call; there is no shared
//! "current options" state. Hosts start from [`MotionOptions::default`] and
//! layer overrides on top through the descriptor-driven registry:
//!
//! ```
//! use subword::settings::{create_settings_registry, MotionOptions};
//!
//! let mut options = MotionOptions::default();
//! create_settings_registry()
//!     .apply_all(&mut options, ["count=3", "nomultiline"])
//!     .unwrap();
//! assert_eq!(options.count, 3);
//! assert!(!options.multi_line);
//! ```

pub mod definitions;
pub mod descriptor;
pub mod registry;

pub use definitions::create_settings_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::error::Result;

/// Per-call motion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionOptions {
    /// Continue onto adjacent lines when the current one has no match
    pub multi_line: bool,
    /// The result must differ from the starting position
    pub must_move: bool,
    /// Stop on an empty line entered while crossing lines
    pub stop_at_empty_line: bool,
    /// Repeat count (at least 1)
    pub count: usize,
    /// Cursor placement for operators; `None` uses the motion's default
    pub inclusive: Option<bool>,
    /// Split words at case, digit and separator transitions
    pub subword: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            multi_line: true,
            must_move: true,
            stop_at_empty_line: true,
            count: 1,
            inclusive: None,
            subword: true,
        }
    }
}

impl MotionOptions {
    /// Defaults with `assignments` applied on top
    pub fn with_overrides<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        create_settings_registry().apply_all(&mut options, assignments)?;
        Ok(options)
    }

    /// Same options with a different repeat count
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
