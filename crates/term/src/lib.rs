//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is then flushed to the terminal by diffing against
//! the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Control tile aspect ratio (tiles are 7 columns by 3 rows by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, ControlsView, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
