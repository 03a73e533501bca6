//! Shortest-distance maps over toroidal character grids.
//!
//! A grid is read as rows of characters where `#` is a wall and `S` the start. Movement is
//! orthogonal and wraps around every edge, so the grid behaves like the surface of a torus. Every
//! open cell gets the length of its shortest path from the start, and the result is rendered back
//! as text: digits, then letters up to 35, then `.` for anything farther or unreachable.
//!
//! The work is split the same way data flows through it: [`grid`] builds the cells and their
//! passability, [`propagation`] settles the distances and [`render`] turns them into rows.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod cell;
pub mod cli;
pub mod errors;
pub mod grid;
pub mod input;
pub mod propagation;
pub mod render;
pub mod types;
pub mod viewer;

mod events;
mod logging;
mod ui;

use tracing::trace;

pub use crate::{
    cli::Cli,
    errors::{GridError, InputError, Malformation},
    grid::Grid,
    propagation::{propagate, Propagation},
    types::StartPolicy,
};

/// Builds, propagates and renders a grid in one go.
///
/// Nothing is rendered unless the grid builds successfully, so callers either get every row or an
/// error.
///
/// # Errors
///
/// This function returns the [`GridError`] raised by [`Grid::from_rows`].
pub fn solve<S: AsRef<str>>(rows: &[S], policy: StartPolicy) -> Result<Vec<String>, GridError> {
    let mut grid = Grid::from_rows(rows, policy)?;
    let summary = propagate(&mut grid);
    trace!(reached = summary.reached, "rendering settled grid");
    Ok(render::render(&grid))
}
