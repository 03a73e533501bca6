//! Error types raised while reading and building grids.

use std::io;

use thiserror::Error;

use crate::cell::Position;

/// Failures of the grid builder.
///
/// Every variant is fatal for a single run: the propagator never starts and no rows are rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// No cell carries the start marker, so propagation has no source.
    #[error("no start cell found in the grid")]
    MissingStart,
    /// The grid does not have a usable rectangular shape.
    #[error("malformed grid: {0}")]
    Malformed(#[from] Malformation),
    /// More than one start marker was found while the policy rejects duplicates.
    #[error(
        "multiple start cells at ({}, {}) and ({}, {})",
        .first.x,
        .first.y,
        .second.x,
        .second.y
    )]
    MultipleStarts {
        /// First marker in row-major order.
        first: Position,
        /// Marker that triggered the rejection.
        second: Position,
    },
}

/// Ways in which a sequence of rows fails to form a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Malformation {
    /// There are no rows at all.
    #[error("the grid has no rows")]
    NoRows,
    /// The rows hold no cells.
    #[error("the grid has zero-width rows")]
    ZeroWidth,
    /// A row is longer or shorter than the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Failures while reading a puzzle from a line source.
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),
    /// The source ended before the dimension line.
    #[error("missing dimension line")]
    MissingHeader,
    /// The dimension line is not two non-negative integers.
    #[error("invalid dimension line {line:?}, expected `<width> <height>`")]
    InvalidHeader {
        /// The line as read.
        line: String,
    },
    /// The source ended before all declared rows were read.
    #[error("expected {expected} rows, found {found}")]
    Truncated {
        /// Declared height.
        expected: usize,
        /// Rows actually read.
        found: usize,
    },
    /// A row does not match the declared width.
    #[error("row {row} has {found} cells, declared width is {declared}")]
    WidthMismatch {
        /// Index of the offending row.
        row: usize,
        /// Width from the dimension line.
        declared: usize,
        /// Width of the offending row.
        found: usize,
    },
}
