//! Diagnostic output setup.

use std::io;

use color_eyre::eyre::{eyre, Result};
use tracing::level_filters::LevelFilter;

/// Installs the global subscriber, writing events up to `level` to standard error.
///
/// Standard output stays reserved for rendered rows.
///
/// # Errors
///
/// This function may return an error if a global subscriber was already installed.
pub(crate) fn init(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
