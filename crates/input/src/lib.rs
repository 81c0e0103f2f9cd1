//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s for the current
//! mode, and provides the non-blocking [`InputSource`] the frame loop polls once
//! per frame.

pub mod map;
pub mod source;

pub use maze_walker_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
