//! Terminal input and loop clocks.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides the
//! [`Ticker`] used to pace the loop poll, gravity and key repeat.

pub mod clock;
pub mod map;

pub use bytetris_types as types;

pub use clock::Ticker;
pub use map::{drain_pending, handle_key_event, should_quit, wants_restart};
