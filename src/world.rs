use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::cell::Cell;
use crate::pattern;
use crate::pattern::PatternError;

/// Offsets of the 8 Moore-neighborhood cells, in reading order.
///
/// See: https://conwaylife.com/wiki/Moore_neighbourhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world dimensions must be non-zero (got {height}x{width})")]
    InvalidDimensions { height: usize, width: usize },

    #[error("world dimensions too large ({height}x{width} cells)")]
    TooLarge { height: usize, width: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read pattern: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode pattern: {0}")]
    Pattern(#[from] PatternError),
}

/// A bounded Game of Life universe.
///
/// Cells live in a row-major buffer, with `next_gen` as a same-shaped scratch
/// buffer so an update reads only the prior generation. Edges do not wrap:
/// anything past the boundary is permanently dead.
#[derive(Debug)]
pub struct World {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    next_gen: Vec<Cell>,
}

impl World {
    /// Create an all-dead world.
    ///
    /// Fails if either dimension is zero, or if the cell count overflows
    /// `usize`.
    pub fn new(height: usize, width: usize) -> Result<Self, WorldError> {
        if height == 0 || width == 0 {
            return Err(WorldError::InvalidDimensions { height, width });
        }

        let Some(len) = height.checked_mul(width) else {
            return Err(WorldError::TooLarge { height, width });
        };

        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; len],
            next_gen: vec![Cell::Dead; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);
        self.cells[i] = cell;
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    /// The number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count the live Moore neighbors of `(row, col)`.
    ///
    /// Each of the 8 directions is bounds-checked on its own, so neighbors
    /// past an edge simply contribute nothing. Corners see at most 3 live
    /// neighbors, edges at most 5, interior cells at most 8.
    pub fn neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;

            if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
                continue;
            }

            count += self.cells[self.index(r as usize, c as usize)].is_alive() as u8;
        }

        count
    }

    /// Compute every cell's next state into the scratch buffer.
    ///
    /// The live generation is left untouched, so the whole scan sees one
    /// consistent snapshot; a cell that dies still counts as a neighbor for
    /// the rest of the pass. Nothing is visible until [`World::commit`].
    ///
    /// See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life#Rules
    pub fn advance(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let i = self.index(row, col);
                let n = self.neighbors(row, col);

                self.next_gen[i] = match (self.cells[i], n) {
                    (Cell::Alive, 2 | 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
    }

    /// Replace the live generation with the last one [`World::advance`]
    /// computed.
    ///
    /// [`World::load`] resets the pending generation to the loaded cells, so
    /// a stray commit right after a load changes nothing.
    pub fn commit(&mut self) {
        self.cells.copy_from_slice(&self.next_gen);
    }

    /// Advance one full generation: compute, then commit.
    pub fn step(&mut self) {
        self.advance();
        self.commit();
    }

    /// Render the current generation, one line per row.
    pub fn render(&self) -> String {
        // Enough for an all-dead frame (one byte per cell plus a newline per
        // row); live glyphs are 3 bytes of UTF-8 and grow the buffer on
        // demand.
        let mut fb = String::with_capacity(self.cells.len().saturating_add(self.height));
        self.render_into(&mut fb);

        fb
    }

    /// Like [`World::render`], but reuses `fb` instead of allocating.
    pub fn render_into(&self, fb: &mut String) {
        fb.clear();

        for row in 0..self.height {
            for col in 0..self.width {
                fb.push(self.cells[self.index(row, col)].glyph());
            }

            fb.push('\n');
        }
    }

    /// Load a pattern, replacing the current generation wholesale.
    ///
    /// The reader is drained before any validation, and the grid is written
    /// only once the whole pattern has decoded; on any error the prior state
    /// survives untouched. The loaded cells also become the pending
    /// generation, so a [`World::commit`] with no intervening advance keeps
    /// them.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<(), LoadError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let cells = pattern::parse(&data, self.height, self.width)?;
        self.cells.copy_from_slice(&cells);
        self.next_gen.copy_from_slice(&cells);

        debug!(live = self.population(), "loaded pattern");

        Ok(())
    }

    /// Load a pattern from a file on disk.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let file = File::open(path)?;

        self.load(file)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);

        row * self.width + col
    }
}
