use crate::session::Phase;
use crate::types::{GridPosition, OVERFLOW_MESSAGE};

/// Read model handed to renderers and status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub position: GridPosition,
    pub overflow: bool,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Empty when no overflow is showing.
    pub fn overflow_message(&self) -> &'static str {
        if self.overflow {
            OVERFLOW_MESSAGE
        } else {
            ""
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            position: GridPosition::center(),
            overflow: false,
            revision: 0,
        }
    }
}
