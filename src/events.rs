//! Event handling functions for user input in the viewer.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::viewer::Viewer;

/// Handles input events and updates the viewer state accordingly.
///
/// This function polls for keyboard events with a timeout to avoid blocking the UI, and forwards
/// key presses to [`handle_key`].
pub(crate) fn handle_events(viewer: &mut Viewer) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(viewer, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press to the viewer.
///
/// `q` and escape quit, `t` and tab toggle between the distance and the input layer. Any other
/// key is ignored.
pub(crate) fn handle_key(viewer: &mut Viewer, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => viewer.exit = true,
        KeyCode::Char('t') | KeyCode::Tab => viewer.layer = viewer.layer.toggled(),
        _ => {}
    }
}
