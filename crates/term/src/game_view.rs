//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::scene::{draw_scene, Canvas, Paint, Tone, SCENE_HEIGHT, SCENE_WIDTH};
use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Ink};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLOCK: char = '▒';

/// A lightweight terminal renderer for the game scene.
pub struct GameView {
    /// Scene cell width in terminal columns.
    cell_w: u16,
    /// Scene cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        assert!(cell_w > 0 && cell_h > 0, "cell size must be non-zero");
        Self { cell_w, cell_h }
    }

    /// Terminal size needed to show the whole scene.
    pub fn required_size(&self) -> (u16, u16) {
        (SCENE_WIDTH * self.cell_w, SCENE_HEIGHT * self.cell_h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (need_w, need_h) = self.required_size();
        if viewport.width < need_w || viewport.height < need_h {
            draw_too_small(fb, need_w, need_h);
            return;
        }

        let mut canvas = TermCanvas {
            fb,
            origin_x: (viewport.width - need_w) / 2,
            origin_y: (viewport.height - need_h) / 2,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        draw_scene(&mut canvas, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Centre a notice asking for a bigger terminal. Lines that do not fit are skipped.
fn draw_too_small(fb: &mut FrameBuffer, need_w: u16, need_h: u16) {
    let mut size = ArrayString::<32>::new();
    let _ = write!(size, "need {need_w}x{need_h}");
    let lines = ["terminal too small", size.as_str()];

    let top = fb.height().saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        if y >= fb.height() {
            break;
        }
        let len = line.chars().count() as u16;
        let x = fb.width().saturating_sub(len) / 2;
        fb.put_str(x, y, line, Ink::Alert);
    }
}

/// [`Canvas`] over a framebuffer region, `cell_w` x `cell_h` characters per scene cell.
pub struct TermCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl TermCanvas<'_> {
    fn col(&self, x: u16) -> u16 {
        self.origin_x + x * self.cell_w
    }

    fn row(&self, y: u16) -> u16 {
        self.origin_y + y * self.cell_h
    }
}

impl Canvas for TermCanvas<'_> {
    fn fill_cell(&mut self, x: u16, y: u16, paint: Paint) {
        let glyph = match paint {
            Paint::Empty => Glyph::BLANK,
            Paint::Locked => Glyph::new(BLOCK, Ink::Locked),
            Paint::Piece(kind) => Glyph::new(BLOCK, Ink::Piece(kind)),
        };
        let (px, py) = (self.col(x), self.row(y));
        self.fb.fill(px, py, self.cell_w, self.cell_h, glyph);
    }

    /// The border hugs the inside of the outer cells: the rightmost column of the
    /// left cells, the leftmost column of the right cells.
    fn frame(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let left = self.col(x + 1) - 1;
        let right = self.col(x + w - 1);
        let top = self.row(y + 1) - 1;
        let bottom = self.row(y + h - 1);

        let line = |ch| Glyph::new(ch, Ink::Frame);
        self.fb.fill(left + 1, top, right - left - 1, 1, line('─'));
        self.fb.fill(left + 1, bottom, right - left - 1, 1, line('─'));
        self.fb.fill(left, top + 1, 1, bottom - top - 1, line('│'));
        self.fb.fill(right, top + 1, 1, bottom - top - 1, line('│'));
        self.fb.put(left, top, line('┌'));
        self.fb.put(right, top, line('┐'));
        self.fb.put(left, bottom, line('└'));
        self.fb.put(right, bottom, line('┘'));
    }

    fn text(&mut self, x: u16, y: u16, text: &str, tone: Tone) {
        let ink = match tone {
            Tone::Label => Ink::Label,
            Tone::Value => Ink::Value,
            Tone::Alert => Ink::Alert,
        };
        let (px, py) = (self.col(x), self.row(y));
        self.fb.put_str(px, py, text, ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameState};
    use crate::types::PieceKind;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn scene_is_centred() {
        let snap = GameState::with_board(Board::new(), PieceKind::O, 5).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(50, 24));

        // Scene is 42x20, so the origin is (4, 2) and the board frame sits on row 4.
        let frame_row = row_text(&fb, 4);
        assert_eq!(frame_row.chars().nth(5), Some('┌'));
        assert_eq!(frame_row.chars().nth(26), Some('┐'));
        assert!(row_text(&fb, 2).trim_start().starts_with("Score:"));
    }

    #[test]
    fn piece_cells_are_two_columns_wide() {
        let snap = GameState::with_board(Board::new(), PieceKind::O, 5).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(42, 20));

        // Board origin is scene cell (1, 3); the O spawns at board x = 4.
        let px = (1 + 4) * 2;
        for dx in 0..4 {
            let glyph = fb.get(px + dx, 3).unwrap();
            assert_eq!(glyph, Glyph::new(BLOCK, Ink::Piece(PieceKind::O)));
        }
        assert_eq!(fb.get(px - 1, 3).unwrap().ch, ' ');
    }

    #[test]
    fn too_small_viewport_shows_notice() {
        let snap = GameState::new(9).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(30, 10));
        let all: String = (0..fb.height()).map(|y| row_text(&fb, y)).collect();
        assert!(all.contains("terminal too small"));
        assert!(all.contains("need 42x20"));
        assert!(!all.contains('┌'));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameState::new(9).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(3, 1));
        assert_eq!(fb.width(), 3);
        let _ = GameView::default().render(&snap, Viewport::new(0, 0));
    }
}
