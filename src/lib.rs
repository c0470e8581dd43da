//! TUI Diagonal (workspace facade crate).
//!
//! Re-exports the member crates as `tui_diagonal::{core,input,term,types}` and
//! hosts the runner configuration.

pub mod config;

pub use tui_diagonal_core as core;
pub use tui_diagonal_input as input;
pub use tui_diagonal_term as term;
pub use tui_diagonal_types as types;
