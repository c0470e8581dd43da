//! Square RGB pixel surface.

use crate::fb::Rgb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    side: u16,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(side: u16) -> Self {
        let len = (side as usize) * (side as usize);
        Self {
            side,
            pixels: vec![Rgb::default(); len],
        }
    }

    pub fn side(&self) -> u16 {
        self.side
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        let side = self.side as i32;
        if x < 0 || y < 0 || x >= side || y >= side {
            return None;
        }
        Some((y as usize) * (self.side as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Full-width horizontal line at row `y`.
    pub fn hline(&mut self, y: i32, color: Rgb) {
        for x in 0..self.side as i32 {
            self.set(x, y, color);
        }
    }

    /// Full-height vertical line at column `x`.
    pub fn vline(&mut self, x: i32, color: Rgb) {
        for y in 0..self.side as i32 {
            self.set(x, y, color);
        }
    }

    /// Filled disc with an outer ring of width `stroke`.
    ///
    /// A pixel belongs to the disc when its center lies within `radius` of
    /// `(cx, cy)`; the outermost `stroke` pixels take the stroke color.
    pub fn fill_circle(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Rgb,
        stroke: Rgb,
        stroke_w: f32,
    ) {
        if radius <= 0.0 {
            return;
        }
        let inner = (radius - stroke_w).max(0.0);
        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d <= inner {
                    self.set(x, y, fill);
                } else if d <= radius {
                    self.set(x, y, stroke);
                }
            }
        }
    }
}
