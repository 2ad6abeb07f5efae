//! Character grid the scene is drawn into.
//!
//! Glyphs record *what* was drawn ([`Ink`]), not how it looks; colours are picked
//! when the grid is flushed. Two grids therefore compare equal exactly when the
//! same scene was drawn, which keeps the diff small.

use crate::types::PieceKind;

/// Role of a glyph in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    /// Background, drawn with the terminal's own colours
    #[default]
    Blank,
    /// Box borders
    Frame,
    Label,
    Value,
    /// Game-over banner and size warnings
    Alert,
    /// Cells fused into the board
    Locked,
    /// Falling or queued piece
    Piece(PieceKind),
}

/// One terminal character and its ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::new(' ', Ink::Blank);

    pub const fn new(ch: char, ink: Ink) -> Self {
        Self { ch, ink }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs matching the terminal size.
///
/// Drawing outside the grid is a layout bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match a new terminal size and blank every glyph; the allocation is reused.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[self.offset(x, y)])
    }

    /// Glyphs of row `y`, left to right.
    pub fn row(&self, y: u16) -> &[Glyph] {
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        assert!(
            x < self.width && y < self.height,
            "glyph at ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.glyphs[i] = glyph;
    }

    /// Write `text` from `(x, y)` rightwards, dropping what passes the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, ink: Ink) {
        let room = self.width.saturating_sub(x) as usize;
        for (dx, ch) in text.chars().take(room).enumerate() {
            self.put(x + dx as u16, y, Glyph::new(ch, ink));
        }
    }

    /// Paint a `w` x `h` block of the same glyph.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, glyph);
            }
        }
    }

    fn offset(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
