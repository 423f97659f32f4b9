//! Host capability required by the motion core
//!
//! The core never owns buffer state. Every query reads the lines it needs
//! through [`LineSource`] at call time, so hosts backed by gap buffers,
//! ropes or piece tables only need to hand out one line at a time.
//!
//! ## Indexing model
//!
//! Lines are **1-based**. Columns handed back to the host are **0-based
//! byte offsets** into the line's UTF-8 text (without the line terminator).

use std::borrow::Cow;

/// Read-only view of the host buffer.
pub trait LineSource {
    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Contents of line `index` (1-based) without the trailing newline,
    /// or `None` when the index is outside `1..=line_count()`.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;

    fn is_empty(&self) -> bool {
        self.line_count() == 0
    }
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        (**self).line(index)
    }
}

impl LineSource for [String] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        index
            .checked_sub(1)
            .and_then(|i| self.get(i))
            .map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl LineSource for [&str] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        index
            .checked_sub(1)
            .and_then(|i| self.get(i))
            .map(|s| Cow::Borrowed(*s))
    }
}
