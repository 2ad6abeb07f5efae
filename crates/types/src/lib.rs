//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the core, the renderers and the
//! input glue. All types are plain data with no external dependencies.
//!
//! # Board Dimensions
//!
//! The playfield is fixed for the lifetime of the game:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 16 rows (indexed 0-15)
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOOP_MS` | 50 | Terminal loop poll interval |
//! | `UPDATE_MS` | 1000 | Gravity interval (one row per tick) |
//! | `KEY_REPEAT_MS` | 150 | Auto-repeat interval for held keys (window front end) |
//!
//! # Examples
//!
//! ```
//! use bytetris_types::{GameAction, Layout, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::ALL[2];
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.index(), 2);
//!
//! let rotated = Rotation::North.rotate_cw();
//! assert_eq!(rotated, Rotation::East);
//! assert_eq!(rotated.layout(), Layout::Column);
//!
//! assert_ne!(GameAction::SoftDrop, GameAction::RotateCw);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 16));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Number of piece kinds
pub const PIECE_COUNT: usize = 7;

/// Terminal loop poll interval in milliseconds
pub const LOOP_MS: u64 = 50;

/// Gravity interval in milliseconds (one row per update)
pub const UPDATE_MS: u64 = 1000;

/// Auto-repeat interval for held keys in milliseconds
pub const KEY_REPEAT_MS: u64 = 150;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(LOOP_MS, 50);
        assert_eq!(UPDATE_MS, 1000);
        assert_eq!(KEY_REPEAT_MS, 150);
    }

    #[test]
    fn piece_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::ALL[kind.index()], *kind);
        }
    }

    #[test]
    fn rotation_index_and_layout() {
        let mut rotation = Rotation::North;
        for i in 0..4 {
            assert_eq!(rotation.index(), i);
            rotation = rotation.rotate_cw();
        }
        assert_eq!(rotation, Rotation::North);
        assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
        assert_eq!(Rotation::North.layout(), Layout::Row);
        assert_eq!(Rotation::East.layout(), Layout::Column);
        assert_eq!(Rotation::South.layout(), Layout::Row);
        assert_eq!(Rotation::West.layout(), Layout::Column);
    }
}

/// The seven tetromino piece kinds, in encoding-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in index order.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position of this kind in the shape table.
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }
}

/// The four orientations of a piece
///
/// - **North**: canonical orientation (0°)
/// - **East**: 90°, read in column layout
/// - **South**: 180°, read in row layout
/// - **West**: 270°, read in column layout
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation as 0..=3 (quarter turns clockwise).
    pub const fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// How the 8 shape bits map to cells in this orientation.
    pub const fn layout(self) -> Layout {
        match self {
            Rotation::North | Rotation::South => Layout::Row,
            Rotation::East | Rotation::West => Layout::Column,
        }
    }
}

/// Bit-to-cell mapping of a shape byte
///
/// ```text
/// Row layout   : 0 1 2 3     Column layout: 0 4
///                4 5 6 7                    1 5
///                                           2 6
///                                           3 7
/// ```
///
/// Bit index 0 is the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Row,
    Column,
}

impl Layout {
    /// Relative `(x, y)` of bit index `i` (0 = MSB).
    #[inline(always)]
    pub const fn cell(self, i: u8) -> (u8, u8) {
        match self {
            Layout::Row => (i % 4, i / 4),
            Layout::Column => (i / 4, i % 4),
        }
    }
}

/// Discrete player commands understood by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Move piece one cell down (never locks)
    SoftDrop,
}
