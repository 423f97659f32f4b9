//! Coordinate adapter between byte offsets and character positions
//!
//! The motion core counts in **1-based character positions**; hosts talk in
//! **0-based byte offsets**. Position `0` means "before the line starts" and
//! `len + 1` means "past the end of the line". Both are legal inputs to the
//! conversions and the scanner.
//!
//! Two backends are provided:
//!
//! - [`Utf8Encoding`] maps positions to codepoints (not grapheme clusters;
//!   combining marks and emoji sequences count as several positions).
//! - [`ByteEncoding`] treats every byte as a character. Multibyte text gets
//!   misaligned boundaries in this mode but never panics. It exists for
//!   hosts that index by byte and accept ASCII-only correctness.
//!
//! Pattern searches always run against the complete line so `^` and `$`
//! only ever see the real line edges.

use crate::pattern::Pattern;

/// Inclusive 1-based character span of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSpan {
    pub start: usize,
    pub end: usize,
}

/// Conversions and searches over a single line
pub trait TextEncoding {
    /// Number of characters in `line`
    fn char_len(&self, line: &str) -> usize;

    /// Position of the character containing `byte`.
    /// `byte >= line.len()` maps to `char_len + 1`.
    fn byte_to_char(&self, line: &str, byte: usize) -> usize;

    /// First byte of the character at `pos`.
    /// `pos == 0` maps to `0`, `pos > char_len` maps to `line.len()`.
    fn char_to_byte(&self, line: &str, pos: usize) -> usize;

    /// Character at `pos`, if the line has one there
    fn char_at(&self, line: &str, pos: usize) -> Option<char>;

    /// Byte just past the end of the character at `pos`
    fn char_end_byte(&self, line: &str, pos: usize) -> usize {
        self.char_to_byte(line, pos + 1)
    }

    /// Byte where the search restarts after a match beginning at `byte`
    fn next_boundary(&self, line: &str, byte: usize) -> usize;

    /// First match of `pattern` starting at or after `from`
    fn find_forward(&self, line: &str, pattern: &Pattern, from: usize) -> Option<CharSpan> {
        let from = from.max(1);
        if from > self.char_len(line) {
            return None;
        }
        let at = self.char_to_byte(line, from);
        let m = pattern.regex().find_at(line.as_bytes(), at)?;
        Some(self.span(line, m.start(), m.end()))
    }

    /// Match of `pattern` lying entirely within `1..=upto` whose end is
    /// furthest right. Overlapping windows are considered, so `"aBC"`
    /// searched for lower-upper and upper-upper pairs sees both.
    fn find_backward(&self, line: &str, pattern: &Pattern, upto: usize) -> Option<CharSpan> {
        let bytes = line.as_bytes();
        let mut at = 0;
        let mut best: Option<CharSpan> = None;
        while at < bytes.len() {
            let Some(m) = pattern.regex().find_at(bytes, at) else {
                break;
            };
            let span = self.span(line, m.start(), m.end());
            if span.start > upto {
                break;
            }
            if span.end <= upto && best.is_none_or(|b| span.end >= b.end) {
                best = Some(span);
            }
            at = self.next_boundary(line, m.start());
        }
        best
    }

    /// Convert a byte range from the regex engine to a character span
    fn span(&self, line: &str, start: usize, end: usize) -> CharSpan {
        let first = self.byte_to_char(line, start);
        let last = if end > start {
            self.byte_to_char(line, end - 1)
        } else {
            first
        };
        CharSpan {
            start: first,
            end: last,
        }
    }
}

/// Codepoint-aware coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Encoding;

impl TextEncoding for Utf8Encoding {
    fn char_len(&self, line: &str) -> usize {
        line.chars().count()
    }

    fn byte_to_char(&self, line: &str, byte: usize) -> usize {
        if byte >= line.len() {
            return self.char_len(line) + 1;
        }
        line.char_indices().take_while(|&(i, _)| i <= byte).count()
    }

    fn char_to_byte(&self, line: &str, pos: usize) -> usize {
        if pos == 0 {
            return 0;
        }
        line.char_indices()
            .nth(pos - 1)
            .map_or(line.len(), |(i, _)| i)
    }

    fn char_at(&self, line: &str, pos: usize) -> Option<char> {
        pos.checked_sub(1).and_then(|i| line.chars().nth(i))
    }

    fn next_boundary(&self, line: &str, byte: usize) -> usize {
        let mut next = byte + 1;
        while next < line.len() && !line.is_char_boundary(next) {
            next += 1;
        }
        next
    }
}

/// Byte-indexed coordinates (ASCII-only correctness)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteEncoding;

impl TextEncoding for ByteEncoding {
    fn char_len(&self, line: &str) -> usize {
        line.len()
    }

    fn byte_to_char(&self, line: &str, byte: usize) -> usize {
        byte.min(line.len()) + 1
    }

    fn char_to_byte(&self, line: &str, pos: usize) -> usize {
        pos.saturating_sub(1).min(line.len())
    }

    fn char_at(&self, line: &str, pos: usize) -> Option<char> {
        pos.checked_sub(1)
            .and_then(|i| line.as_bytes().get(i))
            .map(|&b| {
                if b.is_ascii() {
                    char::from(b)
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            })
    }

    fn next_boundary(&self, _line: &str, byte: usize) -> usize {
        byte + 1
    }
}

/// The encoding selected by the `utf8` feature
#[cfg(feature = "utf8")]
pub type DefaultEncoding = Utf8Encoding;

/// The encoding selected by the `utf8` feature
#[cfg(not(feature = "utf8"))]
pub type DefaultEncoding = ByteEncoding;
