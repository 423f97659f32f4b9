//! Motion driver
//!
//! Repeats scanner queries across lines until the motion's count is used up
//! or the search runs out of text.

use super::motion::MotionSpec;
use super::scanner::{scan, Direction};
use crate::buffer::LineSource;
use crate::encoding::TextEncoding;
use crate::error::{Result, SubwordError};
use crate::position::{MotionTarget, Position};
use log::debug;
use std::borrow::Cow;

/// Fetch line `index` or report it as outside the buffer
pub(crate) fn fetch_line<S>(source: &S, index: usize) -> Result<Cow<'_, str>>
where
    S: LineSource + ?Sized,
{
    source
        .line(index)
        .ok_or_else(|| SubwordError::line_out_of_range(index, source.line_count()))
}

/// Run `spec` from `start`.
///
/// Each repetition scans the current line; when it finds nothing and the
/// spec allows crossing lines, the search continues on the adjacent line
/// from just outside it (position 0 going forward, `len + 1` going
/// backward). Entering an empty line with `stop_at_empty_line` ends that
/// repetition at column 0. Line traversal never leaves `1..=line_count`,
/// so every call terminates.
pub fn compute_motion<S, E>(
    source: &S,
    encoding: &E,
    spec: &MotionSpec<'_>,
    start: Position,
) -> Result<MotionTarget>
where
    S: LineSource + ?Sized,
    E: TextEncoding + ?Sized,
{
    spec.validate()?;
    let line_count = source.line_count();
    let mut line_idx = start.line;
    let mut text = fetch_line(source, line_idx)?;
    let mut pos = encoding.byte_to_char(&text, start.col);

    for _ in 0..spec.count {
        loop {
            if let Some(found) = scan(
                encoding,
                &text,
                pos,
                spec.candidates,
                spec.direction,
                spec.must_move,
            ) {
                pos = found;
                break;
            }

            let next = match spec.direction {
                Direction::Forward if line_idx < line_count => Some(line_idx + 1),
                Direction::Backward if line_idx > 1 => Some(line_idx - 1),
                _ => None,
            };
            let Some(next) = next.filter(|_| spec.multi_line) else {
                let sentinel = match spec.direction {
                    Direction::Forward => text.len() as isize,
                    Direction::Backward => -1,
                };
                debug!("{:?} motion exhausted on line {line_idx}", spec.direction);
                return Ok(MotionTarget::Exhausted {
                    line: line_idx,
                    sentinel,
                });
            };

            line_idx = next;
            text = fetch_line(source, line_idx)?;
            pos = match spec.direction {
                Direction::Forward => 0,
                Direction::Backward => encoding.char_len(&text) + 1,
            };
            debug!("crossed to line {line_idx}");

            if spec.stop_at_empty_line && text.is_empty() {
                pos = 0;
                break;
            }
        }
    }

    let col = encoding.char_to_byte(&text, pos);
    Ok(MotionTarget::Found(Position::new(line_idx, col)))
}
