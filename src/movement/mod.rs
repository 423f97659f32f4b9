//! Sub-word aware word motions
//!
//! ## Design
//!
//! A motion is a table of pattern candidates plus a direction. Boundaries
//! are found by asking every candidate for its nearest hit and keeping the
//! closest one, so `fooBar-baz42` stops at `foo`, `Bar`, `baz` and `42`.
//!
//! Layers, bottom-up:
//!
//! - [`scanner`] - nearest qualifying position on one line
//! - [`driver`] - repeats the scanner across lines under a [`MotionSpec`]
//! - [`motion`] - the closed set of `w`/`e`/`b`/`ge` motions

pub mod driver;
pub mod motion;
pub mod scanner;

// Re-export commonly used types
pub use driver::compute_motion;
pub use motion::{Motion, MotionSpec};
pub use scanner::{scan, Direction};
