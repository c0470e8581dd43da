//! Mouse press/drag/release tracking.
//!
//! Terminal mouse events arrive in character cells. One cell covers one pixel
//! horizontally and two pixels vertically on the drawing surface, so rows are
//! doubled before classification.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::swipe::{Point, SwipeClassifier};
use crate::types::Direction;

/// Pixels per terminal row on the drawing surface.
pub const PIXELS_PER_ROW: f32 = 2.0;

/// A completed pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Press and release on the same terminal cell.
    Tap { column: u16, row: u16 },
    /// A drag that classified as a diagonal. `column` and `row` are where the
    /// press started, so the host can ignore drags that begin off the surface.
    Swipe {
        direction: Direction,
        column: u16,
        row: u16,
    },
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    classifier: SwipeClassifier,
    pressed_at: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn new(classifier: SwipeClassifier) -> Self {
        Self {
            classifier,
            pressed_at: None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Feed one mouse event; returns a gesture when a left press is released.
    pub fn handle_mouse_event(&mut self, ev: MouseEvent) -> Option<Gesture> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_at = Some((ev.column, ev.row));
                None
            }
            MouseEventKind::Down(_) => {
                // A second button aborts the gesture.
                self.pressed_at = None;
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col0, row0) = self.pressed_at.take()?;
                if (col0, row0) == (ev.column, ev.row) {
                    return Some(Gesture::Tap {
                        column: ev.column,
                        row: ev.row,
                    });
                }
                self.classifier
                    .classify(cell_to_point(col0, row0), cell_to_point(ev.column, ev.row))
                    .map(|direction| Gesture::Swipe {
                        direction,
                        column: col0,
                        row: row0,
                    })
            }
            _ => None,
        }
    }

    /// Drop a press in progress.
    pub fn reset(&mut self) {
        self.pressed_at = None;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(SwipeClassifier::default())
    }
}

/// Convert a terminal cell to surface pixel coordinates.
pub fn cell_to_point(column: u16, row: u16) -> Point {
    Point::new(column as f32, row as f32 * PIXELS_PER_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(t: &mut PointerTracker, from: (u16, u16), to: (u16, u16)) -> Option<Gesture> {
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1));
        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
        t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn same_cell_release_is_a_tap() {
        let mut t = PointerTracker::default();
        assert_eq!(
            drag(&mut t, (5, 7), (5, 7)),
            Some(Gesture::Tap { column: 5, row: 7 })
        );
        assert!(!t.is_pressed());
    }

    #[test]
    fn rows_count_double_for_swipes() {
        let mut t = PointerTracker::new(SwipeClassifier::new(4.0));
        // 6 columns left and 3 rows up => (-6, -6) pixels.
        assert_eq!(
            drag(&mut t, (20, 10), (14, 7)),
            Some(Gesture::Swipe {
                direction: Direction::UpLeft,
                column: 20,
                row: 10
            })
        );
        assert_eq!(
            drag(&mut t, (20, 10), (26, 13)),
            Some(Gesture::Swipe {
                direction: Direction::DownRight,
                column: 20,
                row: 10
            })
        );
    }

    #[test]
    fn reset_forgets_the_press() {
        let mut t = PointerTracker::new(SwipeClassifier::new(4.0));
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        t.reset();
        assert!(!t.is_pressed());
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 26, 13)),
            None
        );
    }

    #[test]
    fn flat_drag_is_discarded() {
        let mut t = PointerTracker::new(SwipeClassifier::new(4.0));
        assert_eq!(drag(&mut t, (20, 10), (40, 11)), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = PointerTracker::default();
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
    }

    #[test]
    fn other_button_cancels_press() {
        let mut t = PointerTracker::default();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1));
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
    }
}
