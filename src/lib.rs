//! bytetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `bytetris::{core,input,term,gui,types}` and
//! holds the command-line configuration shared by both binaries.

pub mod config;

pub use bytetris_core as core;
#[cfg(feature = "gui")]
pub use bytetris_gui as gui;
pub use bytetris_input as input;
pub use bytetris_term as term;
pub use bytetris_types as types;
