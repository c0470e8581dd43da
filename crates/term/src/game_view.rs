//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is painted on a square pixel [`Canvas`] and blitted with upper
//! half-block glyphs, so each terminal cell shows one pixel column and two
//! pixel rows. Around it sit the title, the coordinate readout, the overflow
//! message and four direction buttons.

use arrayvec::ArrayVec;

use crate::board::{render_board, ALERT_FILL, BACKGROUND, TOKEN_FILL};
use crate::canvas::Canvas;
use crate::core::{CellMetrics, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GameAction, GRID_COLS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Smallest surface worth drawing (two pixels per cell).
pub const MIN_SURFACE_SIDE: u16 = 12;

/// Rows used by everything other than the board.
const CHROME_ROWS: u16 = 8;
const BUTTON_W: u16 = 7;
const BUTTON_GAP: u16 = 2;

const TITLE: &str = "DIAGONAL 6x6";
const PLAY_LABEL: &str = "[  Play  ]";
const HELP: &str = "Q/E/Z/C move  R restart  Esc quit  drag to swipe";

/// A clickable rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub action: GameAction,
}

impl ButtonRect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.w)
    }
}

/// Where everything lands for one viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub title_y: u16,
    pub surface_x: u16,
    pub surface_y: u16,
    /// Surface side in pixels (terminal columns).
    pub side: u16,
    pub status_y: u16,
    pub message_y: u16,
    pub buttons: ArrayVec<ButtonRect, 4>,
    pub help_y: u16,
}

impl Layout {
    /// Terminal rows occupied by the surface.
    pub fn surface_rows(&self) -> u16 {
        self.side.div_ceil(2)
    }

    /// Whether a terminal cell lies on the drawing surface.
    pub fn surface_contains(&self, column: u16, row: u16) -> bool {
        column >= self.surface_x
            && column < self.surface_x + self.side
            && row >= self.surface_y
            && row < self.surface_y + self.surface_rows()
    }
}

/// A lightweight terminal renderer for the diagonal grid.
pub struct GameView {
    metrics: CellMetrics,
    side: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            metrics: CellMetrics::default(),
            side: 0,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn surface_side(&self) -> u16 {
        self.side
    }

    /// Largest square surface (a multiple of the grid size) that fits.
    pub fn surface_side_for(viewport: Viewport) -> u16 {
        let rows = viewport.height.saturating_sub(CHROME_ROWS);
        let side = viewport.width.saturating_sub(2).min(rows.saturating_mul(2));
        let side = side / GRID_COLS as u16 * GRID_COLS as u16;
        if side < MIN_SURFACE_SIDE {
            0
        } else {
            side
        }
    }

    /// Cache cell sizing for a new surface side.
    ///
    /// The caller repaints the whole frame afterwards; the layout around the
    /// board moves with the surface, idle or not.
    pub fn recompute_cell_metrics(&mut self, side: u16) {
        self.side = side;
        self.metrics = CellMetrics::from_surface_side(side);
    }

    /// Recompute sizing from a viewport; see [`Self::recompute_cell_metrics`].
    pub fn resize(&mut self, viewport: Viewport) {
        self.recompute_cell_metrics(Self::surface_side_for(viewport));
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let side = self.side;
        let surface_rows = side.div_ceil(2);
        let total = CHROME_ROWS + surface_rows;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total) / 2,
            AnchorY::Top => 0,
        };

        let title_y = top;
        let surface_y = top + 2;
        let status_y = surface_y + surface_rows + 1;
        let message_y = status_y + 1;
        let buttons_y = message_y + 1;
        let help_y = buttons_y + 2;

        let row_w = BUTTON_W * 4 + BUTTON_GAP * 3;
        let mut x = viewport.width.saturating_sub(row_w) / 2;
        let mut buttons = ArrayVec::new();
        for dir in Direction::ALL {
            buttons.push(ButtonRect {
                x,
                y: buttons_y,
                w: BUTTON_W,
                action: GameAction::Move(dir),
            });
            x = x.saturating_add(BUTTON_W + BUTTON_GAP);
        }

        Layout {
            title_y,
            surface_x: viewport.width.saturating_sub(side) / 2,
            surface_y,
            side,
            status_y,
            message_y,
            buttons,
            help_y,
        }
    }

    fn play_button(&self, viewport: Viewport) -> ButtonRect {
        let w = PLAY_LABEL.chars().count() as u16;
        ButtonRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height / 2 + 1,
            w,
            action: GameAction::Start,
        }
    }

    /// Map a click to the button under it.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<GameAction> {
        if !snap.active() {
            let play = self.play_button(viewport);
            return play.contains(column, row).then_some(play.action);
        }
        self.layout(viewport)
            .buttons
            .iter()
            .find(|b| b.contains(column, row))
            .map(|b| b.action)
    }

    /// Render the current state into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if !snap.active() {
            self.draw_title_screen(fb, viewport);
            return;
        }
        if self.side == 0 {
            fb.put_str_centered(viewport.height / 2, "Terminal too small", text_style());
            return;
        }

        let layout = self.layout(viewport);
        let label = CellStyle {
            bold: true,
            ..text_style()
        };
        fb.put_str_centered(layout.title_y, TITLE, label);

        let mut canvas = Canvas::new(self.side);
        render_board(&mut canvas, snap.position, snap.overflow, self.metrics);
        blit_canvas(fb, &canvas, layout.surface_x, layout.surface_y);

        self.draw_status(fb, snap, &layout);
        self.draw_buttons(fb, &layout);

        let help = CellStyle {
            dim: true,
            ..text_style()
        };
        fb.put_str_centered(layout.help_y, HELP, help);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title_screen(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let mid = viewport.height / 2;
        let title = CellStyle {
            fg: TOKEN_FILL,
            bold: true,
            ..text_style()
        };
        fb.put_str_centered(mid.saturating_sub(2), TITLE, title);
        fb.put_str_centered(
            mid.saturating_sub(1),
            "Move the token diagonally across the grid",
            text_style(),
        );

        let play = self.play_button(viewport);
        let button = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: TOKEN_FILL,
            bold: true,
            dim: false,
        };
        fb.put_str(play.x, play.y, PLAY_LABEL, button);

        let hint = CellStyle {
            dim: true,
            ..text_style()
        };
        fb.put_str_centered(play.y + 2, "Enter to play, Esc to quit", hint);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let coords = CellStyle {
            fg: if snap.overflow { ALERT_FILL } else { TOKEN_FILL },
            bold: true,
            ..text_style()
        };
        fb.put_str_centered(layout.status_y, &snap.position.to_string(), coords);

        let message = snap.overflow_message();
        if !message.is_empty() {
            let alert = CellStyle {
                fg: ALERT_FILL,
                ..text_style()
            };
            fb.put_str_centered(layout.message_y, message, alert);
        }
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle {
            fg: Rgb::new(230, 230, 240),
            bg: Rgb::new(40, 40, 70),
            bold: true,
            dim: false,
        };
        for b in &layout.buttons {
            let GameAction::Move(dir) = b.action else {
                continue;
            };
            fb.fill_rect(b.x, b.y, b.w, 1, ' ', style);
            fb.put_char(b.x + 2, b.y, dir.arrow(), style);
            fb.put_char(b.x + 4, b.y, button_key(dir), style);
        }
    }
}

fn text_style() -> CellStyle {
    CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
}

fn button_key(dir: Direction) -> char {
    match dir {
        Direction::UpLeft => 'Q',
        Direction::DownLeft => 'Z',
        Direction::UpRight => 'E',
        Direction::DownRight => 'C',
    }
}

/// Copy the canvas into the framebuffer, two pixel rows per terminal row.
pub fn blit_canvas(fb: &mut FrameBuffer, canvas: &Canvas, x: u16, y: u16) {
    let side = canvas.side();
    for ty in 0..side.div_ceil(2) {
        for px in 0..side {
            let top = canvas.get(px as i32, (ty * 2) as i32).unwrap_or(BACKGROUND);
            let bottom = canvas.get(px as i32, (ty * 2 + 1) as i32).unwrap_or(BACKGROUND);
            fb.put_char(x + px, y + ty, '▀', CellStyle::plain(top, bottom));
        }
    }
}
