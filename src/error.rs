//! Errors of maze construction, access and parsing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Zero width or height, or more cells than fit in memory
    #[error("Invalid maze dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Coordinates outside of the maze
    #[error("Coordinates x={x}, y={y} are outside of {width}x{height} maze")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Character that is not a cell glyph
    #[error("Unexpected character `{glyph}` at x={x}, y={y}")]
    UnexpectedGlyph { glyph: char, x: usize, y: usize },
    /// Row width differs from the first row
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Nothing to parse
    #[error("Maze text is empty")]
    EmptyInput,
}

pub type Result<T> = core::result::Result<T, MazeError>;
