//! Puzzle reading and validation from line-based sources.

use std::io::BufRead;

use tracing::debug;

use crate::errors::InputError;

/// Upper bound on the rows reserved up front, whatever height the dimension line declares.
const MAX_RESERVED_ROWS: usize = 1024;

/// Grid rows read from a source together with their declared dimensions.
///
/// This structure is what the reader hands over to the grid builder. Rows are checked against the
/// declared width on the way in, so a puzzle never holds ragged rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// Width taken from the dimension line.
    width: usize,
    /// Height taken from the dimension line.
    height: usize,
    /// Exactly `height` rows of exactly `width` characters.
    rows: Vec<String>,
}

impl Puzzle {
    /// Declared number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Declared number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Reads a puzzle from a line source.
///
/// The first line holds the width and the height separated by whitespace. The next `height` lines
/// are the grid rows; anything after them is ignored. Line terminators, `\r\n` included, are not
/// part of a row.
///
/// # Errors
///
/// This function may return errors if:
/// - The reader fails
/// - The dimension line is missing or is not two non-negative integers
/// - Fewer than `height` rows follow the dimension line
/// - A row does not have exactly `width` characters
pub fn read_puzzle<R: BufRead>(reader: R) -> Result<Puzzle, InputError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(InputError::MissingHeader)??;
    let (width, height) = parse_header(&header)?;
    debug!(width, height, "read dimension line");

    let mut rows = Vec::with_capacity(height.min(MAX_RESERVED_ROWS));
    for (row, line) in lines.take(height).enumerate() {
        let line = line?;
        let found = line.chars().count();
        if found != width {
            return Err(InputError::WidthMismatch {
                row,
                declared: width,
                found,
            });
        }
        rows.push(line);
    }

    if rows.len() < height {
        return Err(InputError::Truncated {
            expected: height,
            found: rows.len(),
        });
    }

    Ok(Puzzle {
        width,
        height,
        rows,
    })
}

/// Parses the `<width> <height>` dimension line.
fn parse_header(line: &str) -> Result<(usize, usize), InputError> {
    let invalid = || InputError::InvalidHeader {
        line: line.to_owned(),
    };

    let mut fields = line.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(width)), Some(Ok(height)), None) => Ok((width, height)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_puzzle_valid_input() {
        let puzzle = read_puzzle(&b"3 2\nS.#\n...\n"[..]).expect("failed to read puzzle");

        assert_eq!(puzzle.width(), 3);
        assert_eq!(puzzle.height(), 2);
        assert_eq!(puzzle.rows(), ["S.#", "..."]);
    }

    #[test]
    fn test_read_puzzle_crlf_and_extra_spacing() {
        let puzzle =
            read_puzzle(&b"  3\t1 \r\nS..\r\n"[..]).expect("failed to read puzzle");

        assert_eq!(puzzle.rows(), ["S.."]);
    }

    #[test]
    fn test_read_puzzle_ignores_trailing_lines() {
        let puzzle = read_puzzle(&b"2 1\nS.\nextra\n"[..]).expect("failed to read puzzle");

        assert_eq!(puzzle.rows(), ["S."]);
    }

    #[test]
    fn test_read_puzzle_missing_final_newline() {
        let puzzle = read_puzzle(&b"2 2\nS.\n.#"[..]).expect("failed to read puzzle");

        assert_eq!(puzzle.rows(), ["S.", ".#"]);
    }

    #[test]
    fn test_read_puzzle_empty_input() {
        let result = read_puzzle(&b""[..]);

        assert!(matches!(result, Err(InputError::MissingHeader)));
    }

    #[test]
    fn test_read_puzzle_invalid_header() {
        for header in ["3", "3 x", "-1 2", "3 2 1", ""] {
            let input = format!("{header}\nS..\n");
            let result = read_puzzle(input.as_bytes());

            assert!(
                matches!(result, Err(InputError::InvalidHeader { ref line }) if line == header),
                "header {header:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_read_puzzle_truncated() {
        let result = read_puzzle(&b"3 3\nS..\n...\n"[..]);

        assert!(matches!(
            result,
            Err(InputError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_puzzle_width_mismatch() {
        let result = read_puzzle(&b"4 2\nS...\n...\n"[..]);

        assert!(matches!(
            result,
            Err(InputError::WidthMismatch {
                row: 1,
                declared: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_read_puzzle_huge_declared_height() {
        for input in [&b"3 18446744073709551615\nS..\n"[..], &b"3 100000000000\nS..\n"[..]] {
            let result = read_puzzle(input);

            assert!(
                matches!(result, Err(InputError::Truncated { found: 1, .. })),
                "a huge height should report the rows actually read"
            );
        }
    }

    #[test]
    fn test_read_puzzle_zero_height() {
        let puzzle = read_puzzle(&b"3 0\n"[..]).expect("failed to read puzzle");

        assert!(puzzle.rows().is_empty());
    }
}
