//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the piece encoding, the board and the falling-piece state
//! machine. It has **zero dependencies** on terminals, windows or I/O, so both
//! front ends share it unchanged.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven canonical shape bytes and their bit-derived rotations
//! - [`draw`]: occupied cells and bounding box of a piece orientation
//! - [`board`]: 10x16 occupancy grid with row clearing
//! - [`game_state`]: active piece, spawning, movement, locking, score, game over
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: plain copies of the state for renderers
//! - [`scene`]: one frame described through the [`scene::Canvas`] trait
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: every next piece is drawn independently from all seven kinds
//! - **No Kicks**: rotation is tried in place; a piece poking past the right wall is shifted back
//! - **Immediate Lock**: a landed piece locks on the next gravity step
//! - **Scoring**: one point per cleared row
//!
//! # Example
//!
//! ```
//! use bytetris_core::GameState;
//! use bytetris_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//!
//! // Gravity until the first piece lands.
//! while !game.tick() {}
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod draw;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scene;
pub mod snapshot;

pub use bytetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use draw::{cells, for_each_cell, height_of, width_of, PieceCells};
pub use game_state::{GameState, Tetromino};
pub use pieces::{canonical_shape, piece_at, ROTATIONS};
pub use rng::SimpleRng;
pub use scene::{draw_scene, Canvas, Paint, Tone, SCENE_HEIGHT, SCENE_WIDTH};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
