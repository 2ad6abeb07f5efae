//! Board module - manages the game grid
//!
//! The board is a 10x16 grid of occupancy flags stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..15 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices cleared by one lock, in the order they were cleared (top to bottom).
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 16 rows of occupancy flags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, `#` for filled and anything else for empty.
    ///
    /// Rows are aligned to the bottom of the board; rows above are empty.
    /// Characters past the board width are ignored.
    ///
    /// ```
    /// use bytetris_core::Board;
    ///
    /// let board = Board::from_rows(&["#........#", "##########"]);
    /// assert!(board.is_row_full(15));
    /// assert!(board.is_occupied(9, 14));
    /// assert!(!board.is_occupied(1, 14));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(
            rows.len() <= BOARD_HEIGHT as usize,
            "{} rows do not fit a board of height {}",
            rows.len(),
            BOARD_HEIGHT
        );
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (dy, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.cells[(top + dy) * BOARD_WIDTH as usize + x] = ch == '#';
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Empty row `y` and copy every row above it down by one.
    ///
    /// The top row is copied into row 1 and keeps its own contents.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let start = y * width;
        self.cells[start..start + width].fill(false);

        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
    }

    /// Clear all full rows in one top-to-bottom pass and return their indices
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Mark cells at `(x + dx, y + dy)` as filled; cells off the board are skipped.
    pub fn fill_cells(&mut self, x: i8, y: i8, cells: impl IntoIterator<Item = (u8, u8)>) {
        for (dx, dy) in cells {
            self.set(x + dx as i8, y + dy as i8, true);
        }
    }

    /// Write occupancy into a fixed grid (used by snapshots)
    pub fn write_grid(&self, out: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_WIDTH as usize)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
