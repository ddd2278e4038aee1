//! Source text that diagnostics can point into.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A byte range within a [`SourceSnippet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        SourceSpan { start, end }
    }

    /// A span covering a single position.
    pub fn point(offset: usize) -> Self {
        SourceSpan {
            start: offset,
            end: offset + 1,
        }
    }
}

/// Named source text for ariadne rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnippet {
    pub name: String,
    pub content: String,
}

impl SourceSnippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        SourceSnippet {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Clamp a span into this snippet so ariadne never sees an out-of-range label.
    pub fn clamp(&self, span: SourceSpan) -> SourceSpan {
        let len = self.content.len();
        let start = span.start.min(len);
        let end = span.end.clamp(start, len);
        SourceSpan { start, end }
    }

    /// Convert a byte span into the char range ariadne labels use.
    ///
    /// Offsets that fall inside a multi-byte character are moved back to
    /// the start of that character.
    pub fn char_range(&self, span: SourceSpan) -> Range<usize> {
        let span = self.clamp(span);
        let to_chars = |mut offset: usize| {
            while !self.content.is_char_boundary(offset) {
                offset -= 1;
            }
            self.content[..offset].chars().count()
        };
        to_chars(span.start)..to_chars(span.end)
    }
}
