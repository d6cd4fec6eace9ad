//! Error types for board operations.

use std::fmt;

use super::types::Square;

/// Error type for queries and mutations addressed at a single square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square lies outside the board dimensions
    OutOfBounds {
        square: Square,
        rows: usize,
        cols: usize,
    },
    /// Moves were requested for a square with no piece on it
    EmptySelection { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { square, rows, cols } => {
                write!(f, "Square {square} is outside the {rows}x{cols} board")
            }
            BoardError::EmptySelection { square } => {
                write!(f, "Square {square} is empty")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for layout notation and board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Board has fewer than 2 rows or 2 columns
    TooSmall { rows: usize, cols: usize },
    /// rows x cols does not fit in memory
    TooLarge { rows: usize, cols: usize },
    /// A row has a different number of cells than the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell token is neither empty nor a piece letter plus owner digit
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },
    /// No bundled preset has this name
    UnknownPreset { name: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooSmall { rows, cols } => {
                write!(f, "Board must be at least 2x2, found {rows}x{cols}")
            }
            LayoutError::TooLarge { rows, cols } => {
                write!(f, "Board of {rows}x{cols} cells is too large")
            }
            LayoutError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "Row {row} has {found} cells, expected {expected}")
            }
            LayoutError::InvalidToken { row, col, token } => {
                write!(f, "Invalid cell token '{token}' at {row},{col}")
            }
            LayoutError::UnknownPreset { name } => {
                write!(f, "Unknown layout preset '{name}'")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not of the form `row,col`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected row,col")
            }
        }
    }
}

impl std::error::Error for SquareError {}
