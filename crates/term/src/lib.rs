//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and instead paints a pixel canvas, blits it into a framebuffer of
//! styled cells, and flushes that framebuffer to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw the board from scratch on every change
//! - Keep grid cells square despite the 1:2 glyph aspect ratio

pub mod board;
pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_diagonal_core as core;
pub use tui_diagonal_types as types;

pub use board::{render_board, token_colors};
pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{blit_canvas, AnchorY, ButtonRect, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
