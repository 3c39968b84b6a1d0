//! Source location types for bujomark

use serde::{Deserialize, Serialize};

/// Represents a position in the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in bytes)
    pub column: usize,
    /// Byte offset from start
    pub offset: usize,
}

impl Position {
    /// Compute the position of a byte offset within `input`.
    ///
    /// Offsets past the end of the input clamp to the final position.
    pub fn at(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count();
        let column = match before.iter().rposition(|&b| b == b'\n') {
            Some(nl) => offset - nl - 1,
            None => offset,
        };
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Represents a span in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span from start and end positions
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from byte offsets into `input`.
    pub fn of(input: &str, start: usize, end: usize) -> Self {
        Self {
            start: Position::at(input, start),
            end: Position::at(input, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_start() {
        let pos = Position::at("hello\nworld", 0);
        assert_eq!(pos, Position { line: 0, column: 0, offset: 0 });
    }

    #[test]
    fn test_position_across_lines() {
        let input = "ab\ncd\nef";
        let pos = Position::at(input, 4);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 4);

        let pos = Position::at(input, 6);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn test_position_clamps() {
        let pos = Position::at("ab", 10);
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_span_of() {
        let span = Span::of("a\nbc", 2, 4);
        assert_eq!(span.start.line, 1);
        assert_eq!(span.start.column, 0);
        assert_eq!(span.end.offset, 4);
    }
}
