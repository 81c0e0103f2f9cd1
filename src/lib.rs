//! Maze walker (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `maze_walker::{core, input, journal, term, types}`.

pub use maze_walker_core as core;
pub use maze_walker_input as input;
pub use maze_walker_journal as journal;
pub use maze_walker_term as term;
pub use maze_walker_types as types;
