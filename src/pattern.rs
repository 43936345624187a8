//! Decoder for the plaintext seed format.
//!
//! A pattern file has a three-letter alphabet: [`ALIVE`], [`DEAD`], and
//! whitespace (space, tab, or newline), which is skipped entirely. Cells fill
//! the grid in reading order as pattern bytes arrive, so line breaks carry no
//! structure; a file may put all `height * width` cells on one line, or break
//! them unevenly, and still decode to the same grid.

use thiserror::Error;

use crate::cell::Cell;

/// The byte encoding a live cell.
pub const ALIVE: u8 = b'#';

/// The byte encoding a dead cell.
pub const DEAD: u8 = b'.';

#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern does not hold one cell per grid slot.
    #[error("invalid pattern size (expected {expected} cells, got {got})")]
    SizeMismatch { expected: usize, got: usize },

    /// A byte outside the pattern alphabet.
    #[error("invalid byte at offset {offset}: 0x{byte:02X}")]
    InvalidByte { offset: usize, byte: u8 },

    /// A grid shape whose cell count overflows `usize`.
    #[error("grid too large ({height}x{width} cells)")]
    TooLarge { height: usize, width: usize },
}

/// Decode a plaintext pattern into a row-major buffer of exactly
/// `height * width` cells.
///
/// The cell count is validated up front, so a pattern of the wrong size is
/// always reported as [`PatternError::SizeMismatch`], even when it also
/// contains stray bytes. A grid shape whose cell count overflows `usize` is
/// rejected outright.
pub fn parse(bytes: &[u8], height: usize, width: usize) -> Result<Vec<Cell>, PatternError> {
    let Some(expected) = height.checked_mul(width) else {
        return Err(PatternError::TooLarge { height, width });
    };

    let got = bytes.iter().filter(|&&b| b == ALIVE || b == DEAD).count();

    if got != expected {
        return Err(PatternError::SizeMismatch { expected, got });
    }

    let mut cells = vec![Cell::Dead; expected];
    let mut filled = 0;

    for (offset, &byte) in bytes.iter().enumerate() {
        match byte {
            ALIVE => {
                cells[filled] = Cell::Alive;
                filled += 1;
            }
            DEAD => {
                cells[filled] = Cell::Dead;
                filled += 1;
            }
            b' ' | b'\t' | b'\n' => {}
            _ => return Err(PatternError::InvalidByte { offset, byte }),
        }
    }

    Ok(cells)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_row_major() {
        let cells = parse(b"#.\n.#", 2, 2).unwrap();

        assert_eq!(
            cells,
            vec![Cell::Alive, Cell::Dead, Cell::Dead, Cell::Alive]
        );
    }

    #[test]
    fn newlines_carry_no_structure() {
        let flat = parse(b"#..#", 2, 2).unwrap();
        let ragged = parse(b"#..\n#", 2, 2).unwrap();

        assert_eq!(flat, ragged);
    }

    #[test]
    fn spaces_and_tabs_are_skipped() {
        let cells = parse(b"# .\t\n.#", 2, 2).unwrap();

        assert_eq!(
            cells,
            vec![Cell::Alive, Cell::Dead, Cell::Dead, Cell::Alive]
        );
    }

    #[test]
    fn too_few_cells() {
        let err = parse(b"#..", 2, 2).unwrap_err();

        assert!(matches!(
            err,
            PatternError::SizeMismatch {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn too_many_cells() {
        let err = parse(b"#.#.#", 2, 2).unwrap_err();

        assert!(matches!(
            err,
            PatternError::SizeMismatch {
                expected: 4,
                got: 5
            }
        ));
    }

    #[test]
    fn rejects_stray_byte_at_its_offset() {
        let err = parse(b"#.x\n.#", 2, 2).unwrap_err();

        assert!(matches!(
            err,
            PatternError::InvalidByte {
                offset: 2,
                byte: b'x'
            }
        ));
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        let err = parse(b"#.\r\n.#", 2, 2).unwrap_err();

        assert!(matches!(
            err,
            PatternError::InvalidByte {
                offset: 2,
                byte: b'\r'
            }
        ));
    }

    #[test]
    fn wrong_size_wins_over_stray_bytes() {
        let err = parse(b"#.x", 2, 2).unwrap_err();

        assert!(matches!(err, PatternError::SizeMismatch { .. }));
    }

    #[test]
    fn rejects_grids_too_large_to_count() {
        let huge = 1usize << (usize::BITS / 2);

        assert!(matches!(
            parse(b"#.", huge, huge),
            Err(PatternError::TooLarge { .. })
        ));
    }

    #[test]
    fn whitespace_only_input_has_no_cells() {
        assert!(matches!(
            parse(b"", 2, 2),
            Err(PatternError::SizeMismatch { expected: 4, got: 0 })
        ));
        assert!(matches!(
            parse(b"\n \t\n", 2, 2),
            Err(PatternError::SizeMismatch { expected: 4, got: 0 })
        ));
    }
}
