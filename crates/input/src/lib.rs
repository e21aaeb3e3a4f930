//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Which arrow slides
//! which way is decided by a [`crate::types::KeyMapping`] chosen at startup;
//! the engine itself never sees keys.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
