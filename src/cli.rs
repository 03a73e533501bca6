//! Command-line configuration and the end-to-end run.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr as _};
use tracing::{info, level_filters::LevelFilter};

use crate::{
    grid::Grid,
    input::read_puzzle,
    logging,
    propagation::{propagate, Propagation},
    render,
    types::StartPolicy,
    viewer::Viewer,
};

/// Shortest wraparound distances from the start cell of a character grid.
///
/// The input starts with a `<width> <height>` line followed by the grid rows, using `#` for walls
/// and `S` for the start. Every open cell is printed as its distance from the start: digits up to
/// 9, letters up to 35 (`Z`), `.` beyond that or when unreachable.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Puzzle file to read; standard input when absent or `-`.
    pub input: Option<PathBuf>,
    /// Write the rendered rows to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// What to do when the grid holds more than one start marker.
    #[arg(long, value_enum, default_value_t)]
    pub starts: StartPolicy,
    /// Browse the result in an interactive terminal view instead of printing it.
    #[arg(long, conflicts_with = "output")]
    pub view: bool,
    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Log errors only.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Maximum level of diagnostics requested on the command line.
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }

        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Runs the whole pipeline as configured by `cli`.
///
/// The puzzle is read, built and propagated before anything is written, so a failing run leaves
/// the output untouched.
///
/// # Errors
///
/// This function may return errors if:
/// - The input cannot be opened or read, or is not a valid puzzle
/// - The grid is malformed or has no usable start
/// - The output cannot be written or the terminal fails while viewing
pub fn run(cli: &Cli) -> Result<()> {
    logging::init(cli.log_level())?;

    let (grid, summary) = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            solve_from(BufReader::new(file), cli.starts)?
        }
        _ => solve_from(io::stdin().lock(), cli.starts)?,
    };

    if cli.view {
        let mut terminal = ratatui::init();
        let result = Viewer::new(grid, summary).run(&mut terminal);
        ratatui::restore();
        return result;
    }

    match cli.output.as_deref() {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create {}", path.display()))?;
            write_rows(BufWriter::new(file), render::rows(&grid))?;
        }
        None => write_rows(BufWriter::new(io::stdout().lock()), render::rows(&grid))?,
    }

    Ok(())
}

/// Reads a puzzle from `reader`, builds its grid and settles every distance.
///
/// # Errors
///
/// This function may return errors if the puzzle cannot be read or the grid cannot be built.
pub fn solve_from<R: BufRead>(reader: R, policy: StartPolicy) -> Result<(Grid, Propagation)> {
    let puzzle = read_puzzle(reader).wrap_err("failed to read puzzle")?;
    let mut grid = Grid::from_rows(puzzle.rows(), policy).wrap_err("failed to build grid")?;
    let start = grid.start();
    info!(
        width = grid.width(),
        height = grid.height(),
        x = start.x,
        y = start.y,
        "grid built"
    );

    let summary = propagate(&mut grid);
    info!(
        depth = summary.depth,
        reached = summary.reached,
        "distances settled"
    );

    Ok((grid, summary))
}

/// Streams rendered rows to `writer`, one per line, and flushes it.
///
/// # Errors
///
/// - [`std::io::Error`]
pub fn write_rows<W, I>(mut writer: W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    for row in rows {
        writeln!(writer, "{row}")?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    /// Runs the read, build and write steps over in-memory buffers.
    fn transcribe(input: &str, policy: StartPolicy) -> Result<String> {
        let (grid, _) = solve_from(input.as_bytes(), policy)?;
        let mut output = Vec::new();
        write_rows(&mut output, render::rows(&grid))?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["toroidist"]);

        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.starts, StartPolicy::Last);
        assert!(!cli.view);
        assert_eq!(cli.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "toroidist",
            "maze.txt",
            "--output",
            "out.txt",
            "--starts",
            "reject",
            "-vv",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("maze.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.starts, StartPolicy::Reject);
        assert_eq!(cli.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(
            Cli::parse_from(["toroidist", "-q"]).log_level(),
            LevelFilter::ERROR
        );
        assert_eq!(
            Cli::parse_from(["toroidist", "-v"]).log_level(),
            LevelFilter::INFO
        );
        assert_eq!(
            Cli::parse_from(["toroidist", "-vvvv"]).log_level(),
            LevelFilter::TRACE
        );
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Cli::try_parse_from(["toroidist", "-v", "-q"]).is_err());
        assert!(Cli::try_parse_from(["toroidist", "--view", "-o", "out.txt"]).is_err());
        assert!(Cli::try_parse_from(["toroidist", "--starts", "first"]).is_err());
    }

    #[test]
    fn test_transcribe_wraparound() {
        let output = transcribe("3 1\nS.#\n", StartPolicy::Last).expect("valid puzzle");

        assert_eq!(output, "01#\n");
    }

    #[test]
    fn test_transcribe_multiline() {
        let output =
            transcribe("4 3\nS..#\n.##.\n....\n", StartPolicy::Last).expect("valid puzzle");

        assert_eq!(output, "012#\n1##2\n1232\n");
    }

    #[test]
    fn test_transcribe_missing_start() {
        let result = transcribe("3 1\n..#\n", StartPolicy::Last);

        assert!(result.is_err());
    }

    #[test]
    fn test_transcribe_multiple_starts() {
        assert_eq!(
            transcribe("3 1\nS.S\n", StartPolicy::Last).expect("valid puzzle"),
            "110\n"
        );
        assert!(transcribe("3 1\nS.S\n", StartPolicy::Reject).is_err());
    }

    #[test]
    fn test_transcribe_zero_height() {
        assert!(transcribe("3 0\n", StartPolicy::Last).is_err());
    }

    #[test]
    fn test_write_rows() {
        let mut output = Vec::new();
        write_rows(&mut output, ["01#".to_owned(), "1.#".to_owned()])
            .expect("writing to a vector should succeed");

        assert_eq!(output, b"01#\n1.#\n");
    }
}
