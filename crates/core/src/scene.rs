//! Scene module - renderer-independent composition of one frame
//!
//! [`draw_scene`] walks a [`GameSnapshot`] once and describes the frame in scene
//! cell units through the [`Canvas`] trait. The terminal and window front ends only
//! decide how big a cell is and what a paint or a tone looks like.
//!
//! ```text
//!  x: 0           12 13
//!  0  Score: 3
//!  1  Game Over
//!  2  +----------+ +------+
//!  3  |          | |      |
//!  4  |  board   | | next |
//!     |  10x16   | +------+
//! 19  +----------+
//! ```

use std::fmt::Write;

use arrayvec::ArrayString;

use crate::draw::{cells, height_of, width_of};
use crate::snapshot::GameSnapshot;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Left edge of the playfield (inside the frame)
pub const BOARD_X: u16 = 1;
/// Top edge of the playfield (inside the frame)
pub const BOARD_Y: u16 = 3;
/// Top-left corner of the next-piece box
pub const NEXT_X: u16 = BOARD_X + BOARD_WIDTH as u16 + 2;
pub const NEXT_Y: u16 = BOARD_Y - 1;

/// Scene width in cells: board frame, one gap column and the widest next box (I).
pub const SCENE_WIDTH: u16 = NEXT_X + 4 + 4;
/// Scene height in cells: two text rows and the board frame.
pub const SCENE_HEIGHT: u16 = BOARD_Y + BOARD_HEIGHT as u16 + 1;

/// What a single cell is filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Playfield background
    Empty,
    /// Cell fused into the board
    Locked,
    /// Cell of a falling or queued piece
    Piece(PieceKind),
}

/// Emphasis of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Label,
    Value,
    Alert,
}

/// Drawing surface addressed in scene cells.
///
/// Coordinates are always inside `SCENE_WIDTH` x `SCENE_HEIGHT`.
pub trait Canvas {
    /// Fill one cell.
    fn fill_cell(&mut self, x: u16, y: u16, paint: Paint);

    /// Outline a rectangle whose outer edge spans `w` x `h` cells starting at `(x, y)`.
    fn frame(&mut self, x: u16, y: u16, w: u16, h: u16);

    /// Write text starting at cell `(x, y)`.
    fn text(&mut self, x: u16, y: u16, text: &str, tone: Tone);
}

/// Outer size of the next-piece box for `kind`: the piece plus one cell of padding
/// and a border on each side.
pub fn next_box_size(kind: PieceKind) -> (u16, u16) {
    (
        width_of(kind, Rotation::North) as u16 + 4,
        height_of(kind, Rotation::North) as u16 + 4,
    )
}

/// Compose one frame of `snap` onto `canvas`.
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, snap: &GameSnapshot) {
    let mut score = ArrayString::<10>::new();
    // u32::MAX has 10 digits.
    let _ = write!(score, "{}", snap.score);
    canvas.text(0, 0, "Score:", Tone::Label);
    canvas.text(4, 0, &score, Tone::Value);

    if snap.game_over {
        canvas.text(0, 1, "Game Over", Tone::Alert);
    }

    for (y, row) in snap.board.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            let paint = if filled { Paint::Locked } else { Paint::Empty };
            canvas.fill_cell(BOARD_X + x as u16, BOARD_Y + y as u16, paint);
        }
    }

    let active = snap.active;
    for (dx, dy) in cells(active.kind, active.rotation) {
        let x = active.x as i16 + dx as i16;
        let y = active.y as i16 + dy as i16;
        if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
            canvas.fill_cell(
                BOARD_X + x as u16,
                BOARD_Y + y as u16,
                Paint::Piece(active.kind),
            );
        }
    }

    canvas.frame(
        BOARD_X - 1,
        BOARD_Y - 1,
        BOARD_WIDTH as u16 + 2,
        BOARD_HEIGHT as u16 + 2,
    );

    let (box_w, box_h) = next_box_size(snap.next);
    canvas.frame(NEXT_X, NEXT_Y, box_w, box_h);
    for (dx, dy) in cells(snap.next, Rotation::North) {
        canvas.fill_cell(
            NEXT_X + 2 + dx as u16,
            NEXT_Y + 2 + dy as u16,
            Paint::Piece(snap.next),
        );
    }
}
