//! Text rendering of settled grids.

use crate::{
    cell::{Cell, WALL},
    grid::Grid,
};

/// Glyph for open cells that were never reached or lie beyond the largest printable distance.
pub const FILLER: char = '.';

/// Base in which distances are printed: ten digits followed by twenty-six letters.
const GLYPH_RADIX: u32 = 36;

/// Maps a distance to its single-character glyph.
///
/// Distances 0 to 9 print as digits, 10 to 35 as the uppercase letters `A` to `Z`, and anything
/// larger, or no distance at all, as [`FILLER`].
pub fn distance_glyph(distance: Option<u32>) -> char {
    distance
        .and_then(|distance| char::from_digit(distance, GLYPH_RADIX))
        .map_or(FILLER, |glyph| glyph.to_ascii_uppercase())
}

/// Maps a cell to the glyph shown for it.
pub fn cell_glyph(cell: &Cell) -> char {
    if cell.is_wall() {
        WALL
    } else {
        distance_glyph(cell.distance())
    }
}

/// Lazily renders the grid one row at a time, top to bottom.
///
/// Each row holds exactly one glyph per cell.
pub fn rows(grid: &Grid) -> impl Iterator<Item = String> + '_ {
    grid.rows()
        .map(|row| row.iter().map(cell_glyph).collect::<String>())
}

/// Renders the whole grid.
pub fn render(grid: &Grid) -> Vec<String> {
    rows(grid).collect()
}
