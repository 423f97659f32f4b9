//! Nearest-boundary scanner over a single line
//!
//! Given a starting character position and a table of candidates, finds the
//! closest position any candidate points at in the scan direction.

use crate::encoding::TextEncoding;
use crate::pattern::Candidate;
use log::{trace, warn};

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Find the nearest qualifying position on `line` starting from `from`.
///
/// `from` may be `0` (before the line) or `len + 1` (past the line). With
/// `must_move` the result differs from `from`; the requirement is dropped
/// when `from` sits outside the line, since getting there already moved the
/// cursor. Returns `None` when no candidate qualifies on this line.
pub fn scan<E>(
    encoding: &E,
    line: &str,
    from: usize,
    candidates: &[Candidate],
    direction: Direction,
    must_move: bool,
) -> Option<usize>
where
    E: TextEncoding + ?Sized,
{
    let len = encoding.char_len(line);
    let must_move = must_move && (1..=len).contains(&from);

    let found = match direction {
        Direction::Forward => {
            let min_target = if must_move { from + 1 } else { from.max(1) };
            if min_target > len {
                return None;
            }
            candidates
                .iter()
                .filter_map(|c| forward_target(encoding, line, len, min_target, c))
                .min()
        }
        Direction::Backward => {
            let max_target = if must_move { from - 1 } else { from.min(len) };
            if max_target == 0 {
                return None;
            }
            candidates
                .iter()
                .filter_map(|c| backward_target(encoding, line, len, max_target, c))
                .max()
        }
    };
    trace!("scan {direction:?} from {from} in {line:?} -> {found:?}");
    found
}

fn forward_target<E>(
    encoding: &E,
    line: &str,
    len: usize,
    min_target: usize,
    candidate: &Candidate,
) -> Option<usize>
where
    E: TextEncoding + ?Sized,
{
    let search_from = min_target.saturating_sub(candidate.start_offset).max(1);
    // A line-start anchor only counts while the window still begins at 1
    if candidate.pattern.is_anchored_start() && search_from > 1 {
        return None;
    }
    let span = encoding.find_forward(line, &candidate.pattern, search_from)?;
    let target = span.start + candidate.start_offset;
    if target > len {
        warn!(
            "pattern {:?} points past the line (target {target}, len {len})",
            candidate.pattern.as_str()
        );
        return None;
    }
    trace!("  {:?} -> {target}", candidate.pattern.as_str());
    Some(target)
}

fn backward_target<E>(
    encoding: &E,
    line: &str,
    len: usize,
    max_target: usize,
    candidate: &Candidate,
) -> Option<usize>
where
    E: TextEncoding + ?Sized,
{
    let upto = (max_target + candidate.end_offset).min(len);
    // A line-end anchor only counts when the window reaches the last character
    if candidate.pattern.is_anchored_end() && upto < len {
        return None;
    }
    let span = encoding.find_backward(line, &candidate.pattern, upto)?;
    let Some(target) = span.end.checked_sub(candidate.end_offset).filter(|&t| t >= 1) else {
        warn!(
            "pattern {:?} points before the line (end {}, offset {})",
            candidate.pattern.as_str(),
            span.end,
            candidate.end_offset
        );
        return None;
    };
    trace!("  {:?} -> {target}", candidate.pattern.as_str());
    Some(target)
}
