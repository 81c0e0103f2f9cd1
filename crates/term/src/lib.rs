//! Terminal rendering for the maze walker.
//!
//! Frames are composed into a plain character framebuffer and flushed to the
//! terminal as a diff against the previous frame.
//!
//! - [`world_view`]: pure composition of the perspective view, minimap and
//!   status line (testable without a terminal)
//! - [`surface`]: clipped drawing windows over a framebuffer
//! - [`renderer`]: raw mode, alternate screen and cell-diff output

pub mod fb;
pub mod renderer;
pub mod surface;
pub mod world_view;

pub use maze_walker_core as core;
pub use maze_walker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, supports_color, TerminalRenderer};
pub use surface::{DisplaySurface, Region, Surface};
pub use world_view::{Viewport, WorldLayout, WorldView, EDITOR_BANNER};
