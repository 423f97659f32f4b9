//! Host-facing positions and motion results

use std::fmt;

/// A cursor position: 1-based line, 0-based byte column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Where a motion ended up.
///
/// `Exhausted` means the search ran out of text in the motion's direction
/// (single-line motion, or first/last buffer line reached). Its sentinel is
/// the line's byte length for forward motions and `-1` for backward ones; it
/// is not a cursor position until [`MotionTarget::clamped`] makes it one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionTarget {
    Found(Position),
    Exhausted { line: usize, sentinel: isize },
}

impl MotionTarget {
    /// The position, if a boundary was found
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Found(p) => Some(*p),
            Self::Exhausted { .. } => None,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Found(p) => p.line,
            Self::Exhausted { line, .. } => *line,
        }
    }

    /// Raw column: the found byte offset, or the sentinel
    #[must_use]
    pub fn column(&self) -> isize {
        match self {
            Self::Found(p) => p.col as isize,
            Self::Exhausted { sentinel, .. } => *sentinel,
        }
    }

    /// A usable cursor position: sentinels are pulled back onto the line
    /// (last byte for the forward sentinel, column 0 for the backward one).
    #[must_use]
    pub fn clamped(&self) -> Position {
        match *self {
            Self::Found(p) => p,
            Self::Exhausted { line, sentinel } if sentinel < 0 => Position::new(line, 0),
            Self::Exhausted { line, sentinel } => {
                Position::new(line, (sentinel as usize).saturating_sub(1))
            }
        }
    }
}

impl fmt::Display for MotionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(p) => write!(f, "{p}"),
            Self::Exhausted { line, sentinel } => write!(f, "exhausted {line}:{sentinel}"),
        }
    }
}

/// Inclusive selection span handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Build a range from `(line, col)` pairs
    #[must_use]
    pub const fn from_pairs(start: (usize, usize), end: (usize, usize)) -> Self {
        Self::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        self.start.line != self.end.line
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
