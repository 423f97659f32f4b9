//! In-memory line buffer
//!
//! A small owned implementation of [`LineSource`] used by the binary, the
//! benches and the tests. Editors plug their own storage in through the
//! trait instead.

use crate::error::Result;
use std::borrow::Cow;
use std::path::Path;

pub mod api;

pub use api::LineSource;

/// Text split into lines, terminators removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create a buffer holding a single empty line, like a fresh editor buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from already split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Split `text` on `\n`, dropping a `\r` before each terminator.
    ///
    /// A trailing newline does not open an extra line, matching how editors
    /// count lines of a file on disk.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let body = body.strip_suffix('\r').unwrap_or(body);
        Self::from_lines(
            body.split('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string()),
        )
    }

    /// Load a file from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!(
            "loaded {} ({} bytes)",
            path.as_ref().display(),
            text.len()
        );
        Ok(Self::from_text(&text))
    }

    /// Borrow the lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineSource for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.lines.as_slice().line(index)
    }
}
