//! User interface rendering for the viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{cell::Cell, render, types::Layer, viewer::Viewer};

/// Colours used for reachable cells, nearest first.
const SHADES: [Color; 5] = [
    Color::LightYellow,
    Color::Yellow,
    Color::LightRed,
    Color::Red,
    Color::Magenta,
];

/// Draws the current layer of the viewer.
///
/// This function clears the frame, centres the bordered grid in the space above the tooltip and
/// renders the key bindings together with the propagation summary underneath.
///
/// # Errors
///
/// This function may return errors if the grid is too large to be addressed in terminal cells or
/// if the layout cannot be split.
pub(crate) fn draw(viewer: &Viewer, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Grid and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get grid content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Wide enough for the layer title even when the grid is narrower
    let columns = u16::try_from(viewer.grid.width())?
        .max(u16::try_from(viewer.layer.repr().len())?);
    let grid_area = centered(
        content_area,
        columns.saturating_add(2),
        u16::try_from(viewer.grid.height())?.saturating_add(2),
    )?;

    let lines: Vec<Line<'_>> = viewer
        .grid
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| styled_cell(cell, viewer.layer, viewer.summary.depth))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let block = Block::bordered()
        .title(viewer.layer.repr())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        grid_area,
    );

    let tooltip_block = Block::bordered()
        .title("(t) toggle layer / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let tooltip = Paragraph::new(summary_line(viewer))
        .alignment(Alignment::Center)
        .block(tooltip_block);

    frame.render_widget(tooltip, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget over the whole frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Centres a `width` by `height` rectangle inside `area`.
///
/// The rectangle shrinks to the area when it does not fit.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let band = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid band from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(band)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid space from horizontal layout")
}

/// Styles one cell of the grid for the given layer.
fn styled_cell(cell: &Cell, layer: Layer, depth: u32) -> Span<'static> {
    let wall = Style::default().fg(Color::Green);

    match layer {
        Layer::Distances => {
            let style = match cell.distance() {
                _ if cell.is_wall() => wall,
                Some(distance) if render::distance_glyph(Some(distance)) != render::FILLER => {
                    Style::default().fg(shade(distance, depth))
                }
                _ => Style::default().fg(Color::DarkGray),
            };
            Span::styled(render::cell_glyph(cell).to_string(), style)
        }
        Layer::Input => {
            let style = if cell.is_wall() {
                wall
            } else if cell.is_start() {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(cell.value().to_string(), style)
        }
    }
}

/// Picks the colour of a reachable cell from its distance relative to the deepest layer.
fn shade(distance: u32, depth: u32) -> Color {
    shade_index(distance, depth)
        .and_then(|index| SHADES.get(index))
        .copied()
        .unwrap_or(Color::Magenta)
}

/// Index into [`SHADES`], scaling distances `0..depth` onto the whole palette.
fn shade_index(distance: u32, depth: u32) -> Option<usize> {
    let steps = i32::try_from(SHADES.len().checked_sub(1)?).ok()?;
    let scaled = i32::try_from(distance).ok()?.checked_mul(steps)?;
    let span = i32::try_from(depth.saturating_sub(1).max(1)).ok()?;

    usize::try_from(rounded_div::i32(scaled, span)).ok()
}

/// Builds the propagation summary shown in the tooltip.
fn summary_line(viewer: &Viewer) -> Line<'static> {
    let summary = viewer.summary;
    let farthest = summary.depth.saturating_sub(1);

    Line::from(format!(
        "{} cells reached / farthest at {farthest}",
        summary.reached
    ))
}
