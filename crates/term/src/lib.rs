//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The shared scene is drawn into a grid of glyphs through the core
//! [`Canvas`](crate::core::Canvas) trait. Glyphs carry an [`Ink`] naming what they
//! show; the renderer picks colours for it and flushes only what changed.
//!
//! Each scene cell is 2 characters wide to compensate for the glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use bytetris_core as core;
pub use bytetris_types as types;

pub use fb::{FrameBuffer, Glyph, Ink};
pub use game_view::{GameView, TermCanvas, Viewport};
pub use renderer::{
    changed_runs, encode_diff_into, encode_full_into, ink_style, piece_color, TerminalRenderer,
};
