//! Source positions for tree nodes.
//!
//! Positions follow the unist convention: lines and columns are 1-indexed,
//! offsets are 0-indexed byte offsets into the original document.

use serde::{Deserialize, Serialize};

/// A single place in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// A range in the source document from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Start point (inclusive)
    pub start: Point,
    /// End point (exclusive)
    pub end: Point,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: Option<usize>) -> Self {
        Point {
            line,
            column,
            offset,
        }
    }
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Position { start, end }
    }

    /// Human-readable `line:column-line:column` form used in diagnostics.
    pub fn to_range_string(&self) -> String {
        format!(
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
