//! Game session - the complete state machine
//!
//! A session owns the token position, the overflow signal and the timer that
//! clears it. All mutation goes through [`GameSession::start`],
//! [`GameSession::attempt_move`] and [`GameSession::advance`].

use log::debug;

use crate::snapshot::GameSnapshot;
use crate::timer::{DeferredTimer, TimerHandle};
use crate::types::{Direction, GameAction, GridPosition, OVERFLOW_CLEAR_MS, OVERFLOW_MESSAGE};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the first start; moves are ignored.
    Idle,
    /// Accepting moves. There is no terminal phase.
    Active,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    position: GridPosition,
    overflow: bool,
    overflow_timer: DeferredTimer,
    /// Milliseconds elapsed since the session was created.
    now_ms: u64,
    /// Bumped on every change that requires a redraw.
    revision: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            position: GridPosition::center(),
            overflow: false,
            overflow_timer: DeferredTimer::new(),
            now_ms: 0,
            revision: 0,
        }
    }

    /// Start (or restart) the game with the token at the grid center
    pub fn start(&mut self) {
        self.phase = Phase::Active;
        self.position = GridPosition::center();
        self.overflow = false;
        self.overflow_timer.cancel();
        self.bump();
        debug!("session started at {}", self.position);
    }

    /// Try to move the token one diagonal step.
    ///
    /// Returns `true` when the token moved. A rejected move keeps the position,
    /// raises the overflow signal and (re)schedules its clearance. Calls made
    /// before [`start`](Self::start) are ignored and return `false`.
    pub fn attempt_move(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Active {
            debug!("ignoring {} before start", dir.as_str());
            return false;
        }

        match self.position.offset(dir) {
            Some(next) => {
                self.position = next;
                self.overflow = false;
                self.overflow_timer.cancel();
                self.bump();
                debug!("moved {} to {}", dir.as_str(), next);
                true
            }
            None => {
                self.signal_overflow();
                debug!("rejected {} at {}", dir.as_str(), self.position);
                false
            }
        }
    }

    /// Apply an input action.
    ///
    /// `Start` only leaves the title screen; `Restart` only resets a running
    /// game. Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.attempt_move(dir),
            GameAction::Start if self.phase == Phase::Idle => {
                self.start();
                true
            }
            GameAction::Restart if self.phase == Phase::Active => {
                self.start();
                true
            }
            GameAction::Start | GameAction::Restart => false,
        }
    }

    fn signal_overflow(&mut self) {
        self.overflow = true;
        self.overflow_timer.schedule(self.now_ms, OVERFLOW_CLEAR_MS);
        self.bump();
    }

    /// Advance the session clock, firing the overflow clearance if it is due.
    ///
    /// Returns the handle of a clearance that fired during this call.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TimerHandle> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms as u64);
        let fired = self.overflow_timer.poll(self.now_ms)?;
        self.overflow = false;
        self.bump();
        debug!("overflow cleared at {}ms", self.now_ms);
        Some(fired)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn overflow_active(&self) -> bool {
        self.overflow
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Milliseconds until the pending overflow clearance, if any.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.overflow_timer.remaining_ms(self.now_ms)
    }

    /// Coordinates as `(row, col)`.
    pub fn coordinates_text(&self) -> String {
        self.position.to_string()
    }

    pub fn overflow_message(&self) -> &'static str {
        if self.overflow {
            OVERFLOW_MESSAGE
        } else {
            ""
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.position = self.position;
        out.overflow = self.overflow;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
