//! Board rendering: grid and token onto a pixel canvas.
//!
//! Pure function of its inputs. Every call repaints the whole surface.

use crate::canvas::Canvas;
use crate::core::CellMetrics;
use crate::fb::Rgb;
use crate::types::{GridPosition, GRID_COLS, GRID_ROWS};

pub const BACKGROUND: Rgb = Rgb::new(13, 13, 26);
/// White at 12% over the background.
pub const GRID_LINE: Rgb = Rgb::new(42, 42, 53);

pub const TOKEN_FILL: Rgb = Rgb::new(0, 212, 255);
pub const TOKEN_STROKE: Rgb = Rgb::new(0, 153, 204);
pub const ALERT_FILL: Rgb = Rgb::new(255, 107, 107);
pub const ALERT_STROKE: Rgb = Rgb::new(204, 68, 68);

const TOKEN_STROKE_PX: f32 = 1.0;

/// Fill and stroke colors for the token.
pub fn token_colors(overflow: bool) -> (Rgb, Rgb) {
    if overflow {
        (ALERT_FILL, ALERT_STROKE)
    } else {
        (TOKEN_FILL, TOKEN_STROKE)
    }
}

/// Draw background, grid lines and the token.
pub fn render_board(
    canvas: &mut Canvas,
    position: GridPosition,
    overflow: bool,
    metrics: CellMetrics,
) {
    canvas.fill(BACKGROUND);
    if metrics.is_empty() {
        return;
    }

    // The closing boundary lands one past the last pixel; pull it back in.
    let last = canvas.side() as i32 - 1;
    for c in 0..=GRID_COLS {
        let x = (c as f32 * metrics.cell_w).round() as i32;
        canvas.vline(x.min(last), GRID_LINE);
    }
    for r in 0..=GRID_ROWS {
        let y = (r as f32 * metrics.cell_h).round() as i32;
        canvas.hline(y.min(last), GRID_LINE);
    }

    let (cx, cy) = metrics.cell_center(position);
    let (fill, stroke) = token_colors(overflow);
    canvas.fill_circle(cx, cy, metrics.token_radius(), fill, stroke, TOKEN_STROKE_PX);
}
