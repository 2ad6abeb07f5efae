//! Window front end.
//!
//! The shared scene is recorded into a [`PixelCanvas`] as rectangle and text
//! commands, then issued to macroquad once per frame. Recording is plain data and
//! is tested without opening a window.

pub mod canvas;
pub mod keys;

pub use bytetris_core as core;
pub use bytetris_types as types;

pub use canvas::{piece_color, DrawCmd, PixelCanvas, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
pub use keys::{held_actions, KEY_BINDINGS};
