//! Motion variants and motion specifications

use super::scanner::Direction;
use crate::error::{ErrorType, Result, SubwordError};
use crate::pattern::{word_end, word_start, Candidate};
use crate::settings::MotionOptions;
use std::fmt;
use std::str::FromStr;

/// The built-in word motions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// `w` - next word start
    WordStart,
    /// `e` - next word end
    WordEnd,
    /// `b` - previous word start
    WordStartBackward,
    /// `ge` - previous word end
    WordEndBackward,
}

impl Motion {
    pub const ALL: [Motion; 4] = [
        Motion::WordStart,
        Motion::WordEnd,
        Motion::WordStartBackward,
        Motion::WordEndBackward,
    ];

    /// Look a motion up by its vim key
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| {
                SubwordError::new(
                    ErrorType::Parse,
                    "UNKNOWN_MOTION",
                    format!("unknown motion '{key}' (expected w, e, b or ge)"),
                )
            })
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Motion::WordStart => "w",
            Motion::WordEnd => "e",
            Motion::WordStartBackward => "b",
            Motion::WordEndBackward => "ge",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Motion::WordStart | Motion::WordEnd => Direction::Forward,
            Motion::WordStartBackward | Motion::WordEndBackward => Direction::Backward,
        }
    }

    /// Candidate table this motion searches with
    #[must_use]
    pub fn candidates(self, subword: bool) -> &'static [Candidate] {
        match self {
            Motion::WordStart | Motion::WordStartBackward => word_start(subword),
            Motion::WordEnd | Motion::WordEndBackward => word_end(subword),
        }
    }

    /// Whether an operator includes the character the motion lands on
    #[must_use]
    pub fn default_inclusive(self) -> bool {
        matches!(self, Motion::WordEnd | Motion::WordEndBackward)
    }

    /// Full specification for this motion under `options`
    #[must_use]
    pub fn spec(self, options: &MotionOptions) -> MotionSpec<'static> {
        MotionSpec {
            direction: self.direction(),
            candidates: self.candidates(options.subword),
            multi_line: options.multi_line,
            must_move: options.must_move,
            stop_at_empty_line: options.stop_at_empty_line,
            count: options.count,
            inclusive: options.inclusive.unwrap_or(self.default_inclusive()),
        }
    }
}

impl FromStr for Motion {
    type Err = SubwordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Everything the motion driver needs for one motion
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSpec<'a> {
    pub direction: Direction,
    pub candidates: &'a [Candidate],
    pub multi_line: bool,
    pub must_move: bool,
    pub stop_at_empty_line: bool,
    pub count: usize,
    /// Only consulted by hosts applying the result to an operator
    pub inclusive: bool,
}

impl<'a> MotionSpec<'a> {
    /// A motion over caller-supplied candidates, with default options
    pub fn custom(direction: Direction, candidates: &'a [Candidate]) -> Result<Self> {
        let options = MotionOptions::default();
        let spec = Self {
            direction,
            candidates,
            multi_line: options.multi_line,
            must_move: options.must_move,
            stop_at_empty_line: options.stop_at_empty_line,
            count: options.count,
            inclusive: false,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Replace the behavioural flags with `options`, keeping the candidates
    #[must_use]
    pub fn with_options(mut self, options: &MotionOptions) -> Self {
        self.multi_line = options.multi_line;
        self.must_move = options.must_move;
        self.stop_at_empty_line = options.stop_at_empty_line;
        self.count = options.count;
        if let Some(inclusive) = options.inclusive {
            self.inclusive = inclusive;
        }
        self
    }

    /// Reject specifications the driver cannot run
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(SubwordError::new(
                ErrorType::Pattern,
                "NO_CANDIDATES",
                "a motion needs at least one pattern candidate",
            ));
        }
        if self.count == 0 {
            return Err(SubwordError::new(
                ErrorType::Settings,
                "INVALID_COUNT",
                "count must be greater than 0",
            ));
        }
        Ok(())
    }
}
