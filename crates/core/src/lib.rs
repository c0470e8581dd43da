//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: time only moves when the caller advances it
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`session`]: position state machine (idle/active, diagonal moves, overflow signal)
//! - [`timer`]: cancelable deferred timer used to clear the overflow signal
//! - [`metrics`]: cell sizing derived from the drawing surface
//! - [`snapshot`]: copyable read model for renderers
//!
//! # Game Rules
//!
//! - The token starts at the grid center (3, 3)
//! - It moves one cell diagonally per input
//! - A move that would leave the 6x6 grid is rejected: the token stays put and
//!   the overflow signal shows for 600ms
//! - A successful move clears the overflow signal immediately
//!
//! # Example
//!
//! ```
//! use tui_diagonal_core::GameSession;
//! use tui_diagonal_types::{Direction, GridPosition};
//!
//! let mut game = GameSession::new();
//! game.start();
//!
//! assert!(game.attempt_move(Direction::UpLeft));
//! assert_eq!(game.position(), GridPosition::new(2, 2).unwrap());
//!
//! // Walk into the corner, then off the grid.
//! game.attempt_move(Direction::UpLeft);
//! game.attempt_move(Direction::UpLeft);
//! assert!(!game.attempt_move(Direction::UpLeft));
//! assert!(game.overflow_active());
//!
//! // The signal clears once 600ms have passed.
//! game.advance(600);
//! assert!(!game.overflow_active());
//! ```

pub mod metrics;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_diagonal_types as types;

// Re-export commonly used types for convenience
pub use metrics::CellMetrics;
pub use session::{GameSession, Phase};
pub use snapshot::GameSnapshot;
pub use timer::{DeferredTimer, TimerHandle};
