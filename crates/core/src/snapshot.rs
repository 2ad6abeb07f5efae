//! Read-only copies of the game state for renderers.

use crate::game_state::Tetromino;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells, indexed `[y][x]`
    pub board: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub score: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(Tetromino::new(PieceKind::I)),
            next: PieceKind::I,
            score: 0,
            game_over: false,
            seed: 0,
        }
    }
}
