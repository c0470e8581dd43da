//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 6x6 grid:
//!
//! - **Rows**: 6 (indexed 0-5, row 0 at the top)
//! - **Columns**: 6 (indexed 0-5, column 0 at the left)
//! - **Start position**: (3, 3)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `OVERFLOW_CLEAR_MS` | 600 | How long the out-of-bounds signal stays visible |
//!
//! # Directions
//!
//! Movement is diagonal only. Offsets are `(row delta, col delta)`:
//!
//! | Direction | Offset |
//! |-----------|--------|
//! | `UpLeft` | (-1, -1) |
//! | `DownLeft` | (+1, -1) |
//! | `UpRight` | (-1, +1) |
//! | `DownRight` | (+1, +1) |
//!
//! # Examples
//!
//! ```
//! use tui_diagonal_types::{Direction, GridPosition, GRID_COLS, GRID_ROWS};
//!
//! let start = GridPosition::center();
//! assert_eq!((start.row(), start.col()), (3, 3));
//!
//! let next = start.offset(Direction::UpLeft).unwrap();
//! assert_eq!((next.row(), next.col()), (2, 2));
//!
//! // Leaving the grid yields no position.
//! let corner = GridPosition::new(0, 0).unwrap();
//! assert_eq!(corner.offset(Direction::UpRight), None);
//!
//! assert_eq!(Direction::from_str("down-right"), Some(Direction::DownRight));
//! assert_eq!(GRID_ROWS, 6);
//! assert_eq!(GRID_COLS, 6);
//! ```

use std::fmt;

/// Grid height in cells (6 rows)
pub const GRID_ROWS: u8 = 6;

/// Grid width in cells (6 columns)
pub const GRID_COLS: u8 = 6;

/// Starting row (grid center)
pub const CENTER_ROW: u8 = 3;

/// Starting column (grid center)
pub const CENTER_COL: u8 = 3;

/// Time the overflow signal stays active after a rejected move (milliseconds).
pub const OVERFLOW_CLEAR_MS: u32 = 600;

/// Minimum swipe displacement on each axis, in surface pixels.
pub const SWIPE_MIN_DISTANCE: f32 = 35.0;

/// Token radius as a fraction of the smaller cell dimension.
pub const TOKEN_RADIUS_RATIO: f32 = 0.32;

/// Message shown while the overflow signal is active.
pub const OVERFLOW_MESSAGE: &str = "Out of bounds!";


/// The four diagonal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Direction {
    /// All directions, in on-screen button order.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// `(row delta, col delta)` applied by a move
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_diagonal_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("upLeft"), Some(Direction::UpLeft));
    /// assert_eq!(Direction::from_str("dr"), Some(Direction::DownRight));
    /// assert_eq!(Direction::from_str("left"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upleft" | "up-left" | "ul" => Some(Direction::UpLeft),
            "downleft" | "down-left" | "dl" => Some(Direction::DownLeft),
            "upright" | "up-right" | "ur" => Some(Direction::UpRight),
            "downright" | "down-right" | "dr" => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::UpLeft => "upLeft",
            Direction::DownLeft => "downLeft",
            Direction::UpRight => "upRight",
            Direction::DownRight => "downRight",
        }
    }

    /// Arrow glyph used on buttons
    pub fn arrow(&self) -> char {
        match self {
            Direction::UpLeft => '↖',
            Direction::DownLeft => '↙',
            Direction::UpRight => '↗',
            Direction::DownRight => '↘',
        }
    }
}

/// Game actions produced by input adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    /// Leave the title screen. Ignored once the game is running.
    Start,
    /// Reset the token to the center.
    Restart,
}

/// Token coordinates on the grid
///
/// Values of this type are always in bounds: the fields are private, the only
/// constructors are checked, and `offset` returns `None` instead of leaving
/// the grid.
///
/// ```compile_fail
/// use tui_diagonal_types::GridPosition;
///
/// let outside = GridPosition { row: 9, col: 9 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_ROWS && col < GRID_COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn center() -> Self {
        Self {
            row: CENTER_ROW,
            col: CENTER_COL,
        }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }

    /// Position one diagonal step away, if it is still on the grid
    pub fn offset(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }
}

impl Default for GridPosition {
    fn default() -> Self {
        Self::center()
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
