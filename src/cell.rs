//! Grid positions, movement directions and the per-cell record the propagator settles.
//!
//! This module holds the smallest pieces of the grid model. A [`Position`] knows how to step in a
//! [`Direction`] on a torus, a [`Passage`] packs the four precomputed passability flags of a cell,
//! and a [`Cell`] ties both to the original input character and the distance found for it.

/// Character marking an impassable cell in the input.
pub const WALL: char = '#';

/// Character marking the propagation source in the input.
pub const START: char = 'S';

/// Zero-based coordinates of a cell, column first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Creates a position from a column and a row index.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Resolves the neighbour one step away in `direction` on a `width` by `height` torus.
    ///
    /// Each axis wraps independently: stepping up from the first row lands on the last row,
    /// stepping right from the last column lands on the first column, and so on. On an axis of
    /// extent one the neighbour is the position itself.
    #[must_use]
    pub const fn step(self, direction: Direction, width: usize, height: usize) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: if self.y == 0 {
                    height.saturating_sub(1)
                } else {
                    self.y - 1
                },
            },
            Direction::Down => Self {
                x: self.x,
                y: if self.y + 1 >= height { 0 } else { self.y + 1 },
            },
            Direction::Left => Self {
                x: if self.x == 0 {
                    width.saturating_sub(1)
                } else {
                    self.x - 1
                },
                y: self.y,
            },
            Direction::Right => Self {
                x: if self.x + 1 >= width { 0 } else { self.x + 1 },
                y: self.y,
            },
        }
    }
}

/// One of the four orthogonal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
}

impl Direction {
    /// Every direction, in the order the propagator expands them.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Bit used for this direction inside a [`Passage`].
    const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Down => 0b0010,
            Self::Left => 0b0100,
            Self::Right => 0b1000,
        }
    }
}

/// The four passability flags of a cell.
///
/// A direction is open when moving that way from the cell, wraparound included, reaches a cell
/// that is not a wall. Walls never have an open direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Passage(u8);

impl Passage {
    /// No direction is open.
    pub const CLOSED: Self = Self(0);

    /// Returns a copy of the passage with `direction` opened.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Reports whether moving in `direction` is allowed.
    pub const fn allows(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Reports whether every direction is blocked.
    pub const fn is_closed(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the open directions in [`Direction::ALL`] order.
    pub fn open(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.allows(*direction))
    }
}

/// A single grid position together with everything known about it.
///
/// Cells are created once by the grid builder with no distance, and the propagator settles each
/// reachable cell exactly once. Unreachable cells and walls keep `None` for good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Where the cell sits in the grid.
    position: Position,
    /// Character read from the input.
    value: char,
    /// Whether the cell is impassable.
    wall: bool,
    /// Whether this is the propagation source.
    start: bool,
    /// Precomputed passability in the four directions.
    passage: Passage,
    /// Settled shortest distance from the start, `None` while unvisited.
    distance: Option<u32>,
}

impl Cell {
    /// Builds an unvisited cell.
    pub(crate) const fn new(position: Position, value: char, start: bool, passage: Passage) -> Self {
        let wall = value == WALL;
        Self {
            position,
            value,
            wall,
            start: start && !wall,
            passage: if wall { Passage::CLOSED } else { passage },
            distance: None,
        }
    }

    /// Position of the cell in the grid.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Character the cell was read from.
    pub const fn value(&self) -> char {
        self.value
    }

    /// Whether the cell is impassable.
    pub const fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the cell is the propagation source.
    pub const fn is_start(&self) -> bool {
        self.start
    }

    /// Precomputed passability flags.
    pub const fn passage(&self) -> Passage {
        self.passage
    }

    /// Settled shortest distance, or `None` if the cell was never reached.
    pub const fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Reports whether recording `candidate` would improve on what the cell holds.
    ///
    /// An unvisited cell is improved by any distance; a visited one only by a strictly smaller
    /// distance.
    pub(crate) fn is_improved_by(&self, candidate: u32) -> bool {
        self.distance.is_none_or(|current| current > candidate)
    }

    /// Records the settled distance of the cell.
    pub(crate) const fn settle(&mut self, distance: u32) {
        self.distance = Some(distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let position = Position::new(1, 1);

        assert_eq!(position.step(Direction::Up, 3, 3), Position::new(1, 0));
        assert_eq!(position.step(Direction::Down, 3, 3), Position::new(1, 2));
        assert_eq!(position.step(Direction::Left, 3, 3), Position::new(0, 1));
        assert_eq!(position.step(Direction::Right, 3, 3), Position::new(2, 1));
    }

    #[test]
    fn test_step_wraps_every_edge() {
        assert_eq!(
            Position::new(2, 0).step(Direction::Up, 4, 3),
            Position::new(2, 2)
        );
        assert_eq!(
            Position::new(2, 2).step(Direction::Down, 4, 3),
            Position::new(2, 0)
        );
        assert_eq!(
            Position::new(0, 1).step(Direction::Left, 4, 3),
            Position::new(3, 1)
        );
        assert_eq!(
            Position::new(3, 1).step(Direction::Right, 4, 3),
            Position::new(0, 1)
        );
    }

    #[test]
    fn test_step_on_unit_axis_stays_put() {
        let position = Position::new(1, 0);

        assert_eq!(position.step(Direction::Up, 3, 1), position);
        assert_eq!(position.step(Direction::Down, 3, 1), position);
    }

    #[test]
    fn test_passage_flags() {
        let passage = Passage::CLOSED
            .with(Direction::Up)
            .with(Direction::Right);

        assert!(passage.allows(Direction::Up));
        assert!(passage.allows(Direction::Right));
        assert!(!passage.allows(Direction::Down));
        assert!(!passage.allows(Direction::Left));
        assert!(!passage.is_closed());
        assert!(Passage::CLOSED.is_closed());
        assert_eq!(
            passage.open().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Right]
        );
    }

    #[test]
    fn test_wall_cell_is_closed_and_never_a_start() {
        let open = Passage::CLOSED.with(Direction::Down);
        let cell = Cell::new(Position::new(0, 0), WALL, true, open);

        assert!(cell.is_wall());
        assert!(!cell.is_start());
        assert!(cell.passage().is_closed());
        assert_eq!(cell.distance(), None);
    }

    #[test]
    fn test_improvement_treats_unvisited_as_infinite() {
        let mut cell = Cell::new(Position::new(0, 0), '.', false, Passage::CLOSED);

        assert!(cell.is_improved_by(u32::MAX));

        cell.settle(4);

        assert!(cell.is_improved_by(3));
        assert!(!cell.is_improved_by(4));
        assert!(!cell.is_improved_by(5));
        assert_eq!(cell.distance(), Some(4));
    }
}
