//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks held
//! movement keys, for terminals with or without key-release events.

pub mod handler;
pub mod map;

pub use fruit_catcher_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, movement_key, should_quit, MoveKey};
