//! Word text objects (`iw` / `aw`)
//!
//! The cursor is first classified as sitting inside a word or inside a run
//! of whitespace. `inner` selects exactly that unit; `around` adds one
//! adjoining whitespace run, which for a word's trailing whitespace may
//! continue over blank lines up to the next word.

use crate::buffer::LineSource;
use crate::encoding::TextEncoding;
use crate::error::{ErrorType, Result, SubwordError};
use crate::movement::driver::{compute_motion, fetch_line};
use crate::movement::{scan, Direction, Motion};
use crate::pattern::{word_end, word_start};
use crate::position::{MotionTarget, Position, TextRange};
use crate::settings::MotionOptions;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// The supported text objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextObject {
    /// `iw` - the word or whitespace run under the cursor
    InnerWord,
    /// `aw` - the same plus one adjoining whitespace run
    AroundWord,
}

impl TextObject {
    pub const ALL: [TextObject; 2] = [TextObject::InnerWord, TextObject::AroundWord];

    /// Look a text object up by its vim key
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|o| o.key() == key)
            .ok_or_else(|| {
                SubwordError::new(
                    ErrorType::Parse,
                    "UNKNOWN_TEXT_OBJECT",
                    format!("unknown text object '{key}' (expected iw or aw)"),
                )
            })
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TextObject::InnerWord => "iw",
            TextObject::AroundWord => "aw",
        }
    }

    /// Compute this object's range at `position`
    pub fn select<S, E>(
        self,
        source: &S,
        encoding: &E,
        position: Position,
        subword: bool,
    ) -> Result<Option<TextRange>>
    where
        S: LineSource + ?Sized,
        E: TextEncoding + ?Sized,
    {
        match self {
            TextObject::InnerWord => inner_word(source, encoding, position, subword),
            TextObject::AroundWord => around_word(source, encoding, position, subword),
        }
    }
}

impl FromStr for TextObject {
    type Err = SubwordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl fmt::Display for TextObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Where the cursor sits relative to the words of its line
/// (character positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    InWord { start: usize, end: usize },
    /// In whitespace, with a word further right
    BeforeWord { cursor: usize, word_start: usize },
    /// In trailing whitespace
    AfterLastWord { cursor: usize },
}

/// One line with the word tables bound
struct WordLine<'t, E: ?Sized> {
    encoding: &'t E,
    text: &'t str,
    subword: bool,
}

impl<'t, E> WordLine<'t, E>
where
    E: TextEncoding + ?Sized,
{
    fn new(encoding: &'t E, text: &'t str, subword: bool) -> Self {
        Self {
            encoding,
            text,
            subword,
        }
    }

    fn next_end(&self, from: usize) -> Option<usize> {
        scan(
            self.encoding,
            self.text,
            from,
            word_end(self.subword),
            Direction::Forward,
            false,
        )
    }

    fn locate(&self, col: usize) -> Cursor {
        let len = self.encoding.char_len(self.text);
        let cursor = self.encoding.byte_to_char(self.text, col).min(len);
        let Some(end) = self.next_end(cursor) else {
            return Cursor::AfterLastWord { cursor };
        };
        let start = scan(
            self.encoding,
            self.text,
            end,
            word_start(self.subword),
            Direction::Backward,
            false,
        )
        .unwrap_or(1);
        if cursor >= start {
            Cursor::InWord { start, end }
        } else {
            Cursor::BeforeWord {
                cursor,
                word_start: start,
            }
        }
    }

    /// Byte just past the last word ending before `pos`, or 0
    fn gap_start(&self, pos: usize) -> usize {
        scan(
            self.encoding,
            self.text,
            pos,
            word_end(self.subword),
            Direction::Backward,
            false,
        )
        .map_or(0, |end| self.encoding.char_end_byte(self.text, end))
    }

    /// First byte of the character at `pos`
    fn first_byte(&self, pos: usize) -> usize {
        self.encoding.char_to_byte(self.text, pos)
    }

    /// Last byte of the character at `pos`
    fn last_byte(&self, pos: usize) -> usize {
        self.encoding.char_end_byte(self.text, pos).saturating_sub(1)
    }

    fn is_blank_at(&self, pos: usize) -> bool {
        pos > 0 && self.encoding.char_at(self.text, pos).is_some_and(char::is_whitespace)
    }
}

/// Last byte of line `index` (0 for an empty line)
fn line_last_byte<S>(source: &S, index: usize) -> Result<usize>
where
    S: LineSource + ?Sized,
{
    Ok(fetch_line(source, index)?.len().saturating_sub(1))
}

/// The next word start after `from`, allowed to cross lines and to stop on
/// an empty line
fn next_word_start<S, E>(
    source: &S,
    encoding: &E,
    from: Position,
    subword: bool,
) -> Result<MotionTarget>
where
    S: LineSource + ?Sized,
    E: TextEncoding + ?Sized,
{
    let options = MotionOptions {
        subword,
        ..MotionOptions::default()
    };
    compute_motion(source, encoding, &Motion::WordStart.spec(&options), from)
}

/// Select the word under the cursor, or the whitespace run it sits in.
///
/// Returns `None` on an empty line. Whitespace runs are bounded by the
/// neighbouring words on the same line, or by the line edges.
pub fn inner_word<S, E>(
    source: &S,
    encoding: &E,
    position: Position,
    subword: bool,
) -> Result<Option<TextRange>>
where
    S: LineSource + ?Sized,
    E: TextEncoding + ?Sized,
{
    let row = position.line;
    let text = fetch_line(source, row)?;
    if text.is_empty() {
        return Ok(None);
    }
    let line = WordLine::new(encoding, &text, subword);

    let (start, end) = match line.locate(position.col) {
        Cursor::InWord { start, end } => (line.first_byte(start), line.last_byte(end)),
        Cursor::BeforeWord { cursor, word_start } => (
            line.gap_start(cursor),
            line.first_byte(word_start).saturating_sub(1),
        ),
        Cursor::AfterLastWord { cursor } => (line.gap_start(cursor), text.len() - 1),
    };
    // Byte-indexed spans over multibyte text can put the gap start past its end
    let range = TextRange::from_pairs((row, start.min(end)), (row, end));
    debug!("iw at {position} -> {range}");
    Ok(Some(range))
}

/// Select the word plus adjoining whitespace, or the whitespace run plus
/// the word that follows it.
///
/// A word's trailing whitespace is preferred; it extends over following
/// whitespace-only lines and stops at an empty line, or just before the
/// next word. Without trailing whitespace the leading run on the same line
/// is taken instead. From whitespace the selection runs through the next
/// word, wherever it is.
pub fn around_word<S, E>(
    source: &S,
    encoding: &E,
    position: Position,
    subword: bool,
) -> Result<Option<TextRange>>
where
    S: LineSource + ?Sized,
    E: TextEncoding + ?Sized,
{
    let row = position.line;
    let text = fetch_line(source, row)?;
    if text.is_empty() {
        return Ok(None);
    }
    let line = WordLine::new(encoding, &text, subword);

    let (start, end) = match line.locate(position.col) {
        Cursor::InWord { start, end } if line.is_blank_at(end + 1) => {
            let from = Position::new(row, line.first_byte(end));
            let end = match next_word_start(source, encoding, from, subword)? {
                MotionTarget::Found(p) if p.col > 0 => Position::new(p.line, p.col - 1),
                MotionTarget::Found(p) if fetch_line(source, p.line)?.is_empty() => p,
                MotionTarget::Found(p) => {
                    Position::new(p.line - 1, line_last_byte(source, p.line - 1)?)
                }
                MotionTarget::Exhausted { line: last, .. } => {
                    Position::new(last, line_last_byte(source, last)?)
                }
            };
            (Position::new(row, line.first_byte(start)), end)
        }
        Cursor::InWord { start, end } if line.is_blank_at(start - 1) => (
            Position::new(row, line.gap_start(start - 1)),
            Position::new(row, line.last_byte(end)),
        ),
        Cursor::InWord { start, end } => (
            Position::new(row, line.first_byte(start)),
            Position::new(row, line.last_byte(end)),
        ),
        Cursor::BeforeWord { cursor, .. } | Cursor::AfterLastWord { cursor } => {
            let from = Position::new(row, line.first_byte(cursor));
            let end = match next_word_start(source, encoding, from, subword)? {
                MotionTarget::Found(p) => {
                    let target = fetch_line(source, p.line)?;
                    if target.is_empty() {
                        p
                    } else {
                        let word = WordLine::new(encoding, &target, subword);
                        let pos = encoding.byte_to_char(&target, p.col);
                        let col = word.next_end(pos).map_or(p.col, |e| word.last_byte(e));
                        Position::new(p.line, col)
                    }
                }
                MotionTarget::Exhausted { line: last, .. } => {
                    Position::new(last, line_last_byte(source, last)?)
                }
            };
            (Position::new(row, line.gap_start(cursor)), end)
        }
    };
    let range = TextRange::new(start.min(end), end);
    debug!("aw at {position} -> {range}");
    Ok(Some(range))
}
