//! Swipe gesture classification.
//!
//! A swipe counts as diagonal when both axes moved at least `min_distance`
//! and neither axis moved more than twice the other.

use crate::types::{Direction, SWIPE_MIN_DISTANCE};

/// A point in surface pixels. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    min_distance: f32,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new(SWIPE_MIN_DISTANCE)
    }
}

impl SwipeClassifier {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
        }
    }

    /// Classify the gesture from `start` to `end`, or `None` if it is not a
    /// clear diagonal.
    pub fn classify(&self, start: Point, end: Point) -> Option<Direction> {
        self.classify_delta(end.x - start.x, end.y - start.y)
    }

    pub fn classify_delta(&self, dx: f32, dy: f32) -> Option<Direction> {
        let abs_x = dx.abs();
        let abs_y = dy.abs();
        if abs_x < self.min_distance || abs_y < self.min_distance {
            return None;
        }
        if abs_x < abs_y * 0.5 || abs_y < abs_x * 0.5 {
            return None;
        }

        if dx < 0.0 && dy < 0.0 {
            Some(Direction::UpLeft)
        } else if dx > 0.0 && dy < 0.0 {
            Some(Direction::UpRight)
        } else if dx < 0.0 && dy > 0.0 {
            Some(Direction::DownLeft)
        } else if dx > 0.0 && dy > 0.0 {
            Some(Direction::DownRight)
        } else {
            // Zero displacement on an axis (only reachable with min_distance = 0).
            None
        }
    }
}
