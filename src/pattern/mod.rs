//! Pattern candidates
//!
//! A candidate is a small regular expression, usually a two-character window
//! such as "lowercase followed by uppercase", plus two offsets that pick one
//! character out of (or next to) the match:
//!
//! - forward scans use `match_start + start_offset`
//! - backward scans use `match_end - end_offset`
//!
//! Both offsets describe the same character for fixed-width windows, which
//! lets one table serve both scan directions. Positions are 1-based
//! character positions and `match_end` is inclusive.
//!
//! Patterns may be anchored with `^` (line start) or `$` (line end). Anchors
//! are honoured against the real line edges, never against the edge of a
//! search window.

use crate::error::{ErrorType, Result, SubwordError};
use regex::bytes::Regex;
use std::fmt;

pub mod builtin;

pub use builtin::{word_end, word_start};

/// A compiled match pattern
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    anchored_start: bool,
    anchored_end: bool,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// Patterns that can match the empty string are rejected: a zero-width
    /// match has no character to point the offsets at.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source)?;
        if regex.is_match(b"") {
            return Err(SubwordError::new(
                ErrorType::Pattern,
                "EMPTY_MATCH",
                format!("pattern '{source}' matches the empty string"),
            ));
        }
        Ok(Self {
            source: source.to_string(),
            anchored_start: source.starts_with('^'),
            anchored_end: ends_with_anchor(source),
            regex,
        })
    }

    /// The pattern text as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern only matches at the start of a line
    #[must_use]
    pub fn is_anchored_start(&self) -> bool {
        self.anchored_start
    }

    /// Whether the pattern only matches at the end of a line
    #[must_use]
    pub fn is_anchored_end(&self) -> bool {
        self.anchored_end
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// `$` counts as an anchor unless it is escaped
fn ends_with_anchor(source: &str) -> bool {
    let Some(body) = source.strip_suffix('$') else {
        return false;
    };
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}

/// One (pattern, start offset, end offset) entry
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub pattern: Pattern,
    /// Offset added to the match start for forward scans
    pub start_offset: usize,
    /// Offset subtracted from the match end for backward scans
    pub end_offset: usize,
}

impl Candidate {
    /// Compile a candidate from pattern text
    pub fn new(source: &str, start_offset: usize, end_offset: usize) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(source)?,
            start_offset,
            end_offset,
        })
    }

    /// Parse the textual form `offset_start,offset_end:pattern`
    /// (e.g. `1,0:\s\S`) used on the command line.
    pub fn parse(spec: &str) -> Result<Self> {
        let malformed = || {
            SubwordError::new(
                ErrorType::Pattern,
                "MALFORMED_CANDIDATE",
                format!("expected 'start,end:pattern', got '{spec}'"),
            )
        };
        let (offsets, source) = spec.split_once(':').ok_or_else(malformed)?;
        let (start, end) = offsets.split_once(',').ok_or_else(malformed)?;
        let start = start.trim().parse::<usize>().map_err(|_| malformed())?;
        let end = end.trim().parse::<usize>().map_err(|_| malformed())?;
        Self::new(source, start, end)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
