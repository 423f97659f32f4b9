//! Host-facing entry point binding a line source to an encoding

use crate::buffer::LineSource;
use crate::encoding::{DefaultEncoding, TextEncoding};
use crate::error::Result;
use crate::movement::{compute_motion, Motion, MotionSpec};
use crate::position::{MotionTarget, Position, TextRange};
use crate::settings::MotionOptions;
use crate::text_object::{around_word, inner_word, TextObject};

/// Runs motions and text objects against one buffer.
///
/// The navigator only borrows the buffer, so a host builds one per query
/// against its current content. Its [`MotionOptions`] drive both the
/// built-in motions and the text objects (`subword` included).
pub struct Navigator<'a, S: ?Sized, E = DefaultEncoding> {
    source: &'a S,
    encoding: E,
    options: MotionOptions,
}

impl<'a, S> Navigator<'a, S>
where
    S: LineSource + ?Sized,
{
    /// Navigator using the crate's default encoding and default options
    pub fn new(source: &'a S) -> Self {
        Self::with_encoding(source, DefaultEncoding::default())
    }
}

impl<'a, S, E> Navigator<'a, S, E>
where
    S: LineSource + ?Sized,
    E: TextEncoding,
{
    pub fn with_encoding(source: &'a S, encoding: E) -> Self {
        Self {
            source,
            encoding,
            options: MotionOptions::default(),
        }
    }

    /// Replace the options used by [`Navigator::apply`] and the text objects
    #[must_use]
    pub fn with_options(mut self, options: MotionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &MotionOptions {
        &self.options
    }

    /// Run an arbitrary motion specification
    pub fn motion(&self, spec: &MotionSpec<'_>, start: Position) -> Result<MotionTarget> {
        compute_motion(self.source, &self.encoding, spec, start)
    }

    /// Run a built-in motion under the navigator's options
    pub fn apply(&self, motion: Motion, start: Position) -> Result<MotionTarget> {
        self.motion(&motion.spec(&self.options), start)
    }

    pub fn inner_word(&self, position: Position) -> Result<Option<TextRange>> {
        inner_word(self.source, &self.encoding, position, self.options.subword)
    }

    pub fn around_word(&self, position: Position) -> Result<Option<TextRange>> {
        around_word(self.source, &self.encoding, position, self.options.subword)
    }

    pub fn select(&self, object: TextObject, position: Position) -> Result<Option<TextRange>> {
        object.select(self.source, &self.encoding, position, self.options.subword)
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
