//! Layered shortest-distance propagation over a toroidal grid.
//!
//! This module labels every cell reachable from the start with its shortest wraparound distance.
//! Every move costs one, so the propagation is a breadth-first search run one distance layer at a
//! time, with two frontier buffers swapped between layers instead of recursing per layer.

use std::mem;

use tracing::{debug, trace};

use crate::{cell::Position, grid::Grid};

/// Summary of a finished propagation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Propagation {
    /// Number of distance layers that settled at least one cell.
    ///
    /// This is one more than the largest finite distance in the grid.
    pub depth: u32,
    /// Number of cells that received a distance.
    pub reached: usize,
}

/// Settles the shortest distance from the start of `grid` for every reachable cell.
///
/// Cells queued more than once for the same layer are settled the first time only, and a cell is
/// only ever queued for a distance strictly smaller than the one it holds. Walls and cells with no
/// passable route from the start keep no distance.
pub fn propagate(grid: &mut Grid) -> Propagation {
    let mut summary = Propagation::default();
    let mut distance: u32 = 0;
    let mut frontier: Vec<Position> = vec![grid.start()];
    let mut next: Vec<Position> = Vec::new();

    while !frontier.is_empty() {
        let mut settled = 0_usize;

        for position in frontier.drain(..) {
            let Some(cell) = grid.cell_mut(position) else {
                continue;
            };
            if cell.is_wall() || !cell.is_improved_by(distance) {
                continue;
            }
            cell.settle(distance);
            settled += 1;

            for direction in cell.passage().open() {
                let neighbour = grid.neighbour(position, direction);
                if grid
                    .cell(neighbour)
                    .is_some_and(|cell| cell.is_improved_by(distance + 1))
                {
                    next.push(neighbour);
                }
            }
        }

        trace!(distance, settled, queued = next.len(), "layer settled");
        if settled > 0 {
            summary.depth = distance + 1;
            summary.reached += settled;
        }

        mem::swap(&mut frontier, &mut next);
        distance += 1;
    }

    debug!(depth = summary.depth, reached = summary.reached, "propagation finished");
    summary
}
