//! Grid construction and cell lookup.
//!
//! This module contains the [`Grid`] struct, which turns rows of characters into cells with their
//! wall status, start marker and wraparound passability settled once and for all.

use tracing::{debug, warn};

use crate::{
    cell::{Cell, Direction, Passage, Position, START, WALL},
    errors::{GridError, Malformation},
    types::StartPolicy,
};

/// Rectangular toroidal grid of cells.
///
/// Cells are stored row by row. The dimensions are fixed at construction and every row has the
/// same width, so column wraparound always uses one global width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Position of the propagation source.
    start: Position,
}

impl Grid {
    /// Builds a grid from rows of characters.
    ///
    /// The rows are validated to form a non-empty rectangle, walls and the start marker are
    /// located, and each open cell gets its four passability flags computed under wraparound. When
    /// several start markers are present, `policy` decides whether the last one wins or the build
    /// fails.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - There are no rows, the rows are empty or their widths differ
    /// - No start marker is present
    /// - Several start markers are present and `policy` is [`StartPolicy::Reject`]
    pub fn from_rows<S: AsRef<str>>(rows: &[S], policy: StartPolicy) -> Result<Self, GridError> {
        let (width, height, values) = collect_values(rows)?;
        let start = find_start(&values, width, policy)?;
        debug!(width, height, x = start.x, y = start.y, "grid shape validated");

        let walls: Vec<bool> = values.iter().map(|&value| value == WALL).collect();
        let is_open = |position: Position| {
            walls
                .get(position.y * width + position.x)
                .is_some_and(|wall| !wall)
        };

        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let position = Position::new(index % width, index / width);
                let passage = Direction::ALL
                    .into_iter()
                    .filter(|&direction| is_open(position.step(direction, width, height)))
                    .fold(Passage::CLOSED, Passage::with);
                Cell::new(position, value, position == start, passage)
            })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            start,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Position of the propagation source.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Looks up the cell at `position`, if it lies inside the grid.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|index| self.cells.get(index))
    }

    /// Mutable counterpart of [`Grid::cell`], reserved to the propagator.
    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).and_then(|index| self.cells.get_mut(index))
    }

    /// Resolves the wraparound neighbour of `position` in `direction`.
    pub const fn neighbour(&self, position: Position, direction: Direction) -> Position {
        position.step(direction, self.width, self.height)
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Flat index of `position`, or `None` when it falls outside the grid.
    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.width && position.y < self.height {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }
}

/// Checks that the rows form a non-empty rectangle and flattens their characters.
fn collect_values<S: AsRef<str>>(rows: &[S]) -> Result<(usize, usize, Vec<char>), Malformation> {
    let first = rows.first().ok_or(Malformation::NoRows)?;
    let width = first.as_ref().chars().count();
    if width == 0 {
        return Err(Malformation::ZeroWidth);
    }

    let mut values = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let before = values.len();
        values.extend(line.as_ref().chars());
        let found = values.len() - before;
        if found != width {
            return Err(Malformation::Ragged {
                row,
                expected: width,
                found,
            });
        }
    }

    Ok((width, rows.len(), values))
}

/// Scans the flattened grid for the start marker according to `policy`.
fn find_start(values: &[char], width: usize, policy: StartPolicy) -> Result<Position, GridError> {
    let mut start: Option<Position> = None;

    for (index, _) in values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == START)
    {
        let position = Position::new(index % width, index / width);
        if let Some(previous) = start {
            match policy {
                StartPolicy::Reject => {
                    return Err(GridError::MultipleStarts {
                        first: previous,
                        second: position,
                    });
                }
                StartPolicy::Last => {
                    warn!(
                        x = previous.x,
                        y = previous.y,
                        "discarding earlier start marker"
                    );
                }
            }
        }
        start = Some(position);
    }

    start.ok_or(GridError::MissingStart)
}
