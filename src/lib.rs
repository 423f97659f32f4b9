//! Subword - sub-word aware word motions and word text objects
//!
//! `w`, `e`, `b` and `ge` that stop inside `camelCase`, `snake_case`,
//! `kebab-case` and `HTTPServer` style identifiers, plus `iw` / `aw`
//! selections built on the same boundaries.
//!
//! ```
//! use subword::{LineBuffer, Motion, MotionTarget, Navigator, Position};
//!
//! let buffer = LineBuffer::from_text("let parseHttpHeader = 1;\n");
//! let nav = Navigator::new(&buffer);
//! let target = nav.apply(Motion::WordStart, Position::new(1, 4)).unwrap();
//! assert_eq!(target, MotionTarget::Found(Position::new(1, 9)));
//! ```

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod movement;
pub mod navigator;
pub mod pattern;
pub mod position;
pub mod settings;
pub mod text_object;

pub use buffer::{LineBuffer, LineSource};
pub use encoding::{ByteEncoding, DefaultEncoding, TextEncoding, Utf8Encoding};
pub use error::{Result, SubwordError};
pub use movement::{Direction, Motion, MotionSpec};
pub use navigator::Navigator;
pub use pattern::Candidate;
pub use position::{MotionTarget, Position, TextRange};
pub use settings::MotionOptions;
pub use text_object::TextObject;
