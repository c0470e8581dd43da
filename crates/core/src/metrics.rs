//! Cell sizing derived from the drawing surface.

use crate::types::{GridPosition, GRID_COLS, GRID_ROWS, TOKEN_RADIUS_RATIO};

/// Pixel size of one grid cell.
///
/// Width and height are tracked separately even though the surface is square.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellMetrics {
    pub cell_w: f32,
    pub cell_h: f32,
}

impl CellMetrics {
    pub fn new(cell_w: f32, cell_h: f32) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn from_surface_side(side: u16) -> Self {
        let side = side as f32;
        Self {
            cell_w: side / GRID_COLS as f32,
            cell_h: side / GRID_ROWS as f32,
        }
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn cell_origin(&self, pos: GridPosition) -> (f32, f32) {
        (pos.col() as f32 * self.cell_w, pos.row() as f32 * self.cell_h)
    }

    /// Center pixel of the cell at `pos`.
    pub fn cell_center(&self, pos: GridPosition) -> (f32, f32) {
        let (x, y) = self.cell_origin(pos);
        (x + self.cell_w / 2.0, y + self.cell_h / 2.0)
    }

    pub fn token_radius(&self) -> f32 {
        self.cell_w.min(self.cell_h) * TOKEN_RADIUS_RATIO
    }

    pub fn is_empty(&self) -> bool {
        self.cell_w <= 0.0 || self.cell_h <= 0.0
    }
}
