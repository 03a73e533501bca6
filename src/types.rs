//! Type definitions for run configuration and viewer navigation.

use clap::ValueEnum;

/// Policy applied when the input carries more than one start marker.
///
/// This enumeration decides which cell becomes the propagation source. By default the last marker
/// found in row-major order wins and the others are read as open cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPolicy {
    /// Keep the last start marker in row-major order.
    ///
    /// Earlier markers are read as plain open cells.
    #[default]
    Last,
    /// Fail the run as soon as a second start marker is found.
    Reject,
}

/// Layer shown by the interactive viewer.
///
/// This enumeration holds which representation of the grid is currently displayed. The user
/// toggles between both with a single key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layer {
    /// Rendered distance glyphs.
    #[default]
    Distances,
    /// Characters as read from the input.
    Input,
}

impl Layer {
    /// Returns the layer shown after toggling.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Distances => Self::Input,
            Self::Input => Self::Distances,
        }
    }

    /// Returns the title displayed above the grid for this layer.
    pub const fn repr(self) -> &'static str {
        match self {
            Self::Distances => "Distances",
            Self::Input => "Input",
        }
    }
}
