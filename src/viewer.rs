//! Interactive terminal view of a settled distance map.

use std::io;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, grid::Grid, propagation::Propagation, types::Layer, ui};

/// Viewer state for a grid whose distances are already settled.
///
/// This structure holds everything Ratatui renders from and Crossterm events write to. The grid
/// itself is never mutated while viewing.
pub struct Viewer {
    /// Viewer exit flag.
    ///
    /// This field starts off `false` and is set once the user asks to quit.
    pub(crate) exit: bool,
    /// Layer currently displayed.
    pub(crate) layer: Layer,
    /// Grid with settled distances.
    pub(crate) grid: Grid,
    /// Summary of the propagation that settled [`grid`](Viewer::grid).
    pub(crate) summary: Propagation,
}

impl Viewer {
    /// Creates a viewer showing the distance layer of `grid`.
    pub fn new(grid: Grid, summary: Propagation) -> Self {
        Self {
            exit: false,
            layer: Layer::Distances,
            grid,
            summary,
        }
    }

    /// Runs the main loop of the viewer.
    ///
    /// This function draws the current layer and handles user input until the exit condition is
    /// `true`, after which it returns to the call site so the terminal can be restored.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
