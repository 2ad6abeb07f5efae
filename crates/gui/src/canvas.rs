//! Pixel canvas: records the scene as macroquad draw commands.

use arrayvec::ArrayString;
use macroquad::color::{Color, BLUE, GRAY, GREEN, MAGENTA, RED, SKYBLUE, WHITE, YELLOW};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::draw_text;

use crate::core::scene::{Canvas, Paint, Tone, SCENE_HEIGHT, SCENE_WIDTH};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Side of one scene cell in pixels
pub const TILE_SIZE: f32 = 20.0;

/// Window width: the board plus room for the side panel, in tiles
pub const WINDOW_WIDTH: f32 = (BOARD_WIDTH as f32 + 20.0) * TILE_SIZE;
/// Window height: the board plus room for the text rows, in tiles
pub const WINDOW_HEIGHT: f32 = (BOARD_HEIGHT as f32 + 6.0) * TILE_SIZE;

const BOX_COLOR: Color = WHITE;
const LOCKED_COLOR: Color = GRAY;
const Z_COLOR: Color = Color::new(0.96, 0.96, 0.96, 1.0);

/// Gap between a frame's outline and the cells it encloses
const FRAME_GAP: f32 = 2.0;

/// Fill colour of a piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => RED,
        PieceKind::O => GREEN,
        PieceKind::T => YELLOW,
        PieceKind::J => BLUE,
        PieceKind::L => MAGENTA,
        PieceKind::S => SKYBLUE,
        PieceKind::Z => Z_COLOR,
    }
}

/// One recorded drawing operation, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Outline {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        x: f32,
        /// Baseline
        y: f32,
        size: f32,
        text: ArrayString<16>,
        color: Color,
    },
}

/// [`Canvas`] that turns scene cells into pixel rectangles.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    tile: f32,
    origin_x: f32,
    origin_y: f32,
    cmds: Vec<DrawCmd>,
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new(TILE_SIZE)
    }
}

impl PixelCanvas {
    pub fn new(tile: f32) -> Self {
        Self {
            tile,
            origin_x: 0.0,
            origin_y: 0.0,
            cmds: Vec::with_capacity(256),
        }
    }

    /// Drop the previous frame and centre the scene in a `width` x `height` window.
    pub fn begin(&mut self, width: f32, height: f32) {
        self.cmds.clear();
        self.origin_x = ((width - SCENE_WIDTH as f32 * self.tile) / 2.0).max(0.0).floor();
        self.origin_y = ((height - SCENE_HEIGHT as f32 * self.tile) / 2.0).max(0.0).floor();
    }

    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Issue the recorded commands to macroquad, in order.
    pub fn present(&self) {
        for cmd in &self.cmds {
            match *cmd {
                DrawCmd::Rect { x, y, w, h, color } => draw_rectangle(x, y, w, h, color),
                DrawCmd::Outline { x, y, w, h, color } => draw_rectangle_lines(x, y, w, h, 1.0, color),
                DrawCmd::Text {
                    x,
                    y,
                    size,
                    ref text,
                    color,
                } => {
                    draw_text(text, x, y, size, color);
                }
            }
        }
    }

    fn px(&self, x: u16) -> f32 {
        self.origin_x + x as f32 * self.tile
    }

    fn py(&self, y: u16) -> f32 {
        self.origin_y + y as f32 * self.tile
    }
}

impl Canvas for PixelCanvas {
    fn fill_cell(&mut self, x: u16, y: u16, paint: Paint) {
        let color = match paint {
            // The window is cleared to black every frame.
            Paint::Empty => return,
            Paint::Locked => LOCKED_COLOR,
            Paint::Piece(kind) => piece_color(kind),
        };
        self.cmds.push(DrawCmd::Rect {
            x: self.px(x),
            y: self.py(y),
            w: self.tile,
            h: self.tile,
            color,
        });
    }

    /// Outline the enclosed cells with a small gap, leaving the border cells empty.
    fn frame(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        self.cmds.push(DrawCmd::Outline {
            x: self.px(x + 1) - FRAME_GAP,
            y: self.py(y + 1) - FRAME_GAP,
            w: (w - 2) as f32 * self.tile + 2.0 * FRAME_GAP,
            h: (h - 2) as f32 * self.tile + 2.0 * FRAME_GAP,
            color: BOX_COLOR,
        });
    }

    fn text(&mut self, x: u16, y: u16, text: &str, tone: Tone) {
        let color = match tone {
            Tone::Label | Tone::Value => WHITE,
            Tone::Alert => RED,
        };
        let mut run = ArrayString::<16>::new();
        for ch in text.chars() {
            if run.try_push(ch).is_err() {
                break;
            }
        }
        self.cmds.push(DrawCmd::Text {
            x: self.px(x),
            // macroquad places text by baseline.
            y: self.py(y) + self.tile * 0.8,
            size: self.tile,
            text: run,
            color,
        });
    }
}
