//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`] values
//! and diagonal swipes. Buttons, keys and swipes all end up as the same
//! [`crate::types::Direction`] handed to the session.

pub mod map;
pub mod pointer;
pub mod swipe;

pub use tui_diagonal_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{cell_to_point, Gesture, PointerTracker};
pub use swipe::{Point, SwipeClassifier};
