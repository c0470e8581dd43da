//! Cancelable one-shot timer driven by an external millisecond clock.
//!
//! The timer never reads wall-clock time. Its owner advances a clock and polls,
//! which keeps deferred behavior deterministic under test.

/// Identifies one scheduling of a [`DeferredTimer`].
///
/// A handle goes stale as soon as the timer is canceled or rescheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Default)]
pub struct DeferredTimer {
    deadline_ms: Option<u64>,
    generation: u64,
}

impl DeferredTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer `delay_ms` after `now_ms`, replacing any pending deadline.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32) -> TimerHandle {
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms as u64));
        TimerHandle(self.generation)
    }

    /// Cancel the pending deadline, if any. Outstanding handles become stale.
    pub fn cancel(&mut self) {
        if self.deadline_ms.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Milliseconds until the deadline, or `None` when nothing is pending.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }

    /// Fire the timer if its deadline has passed.
    ///
    /// Returns the handle of the scheduling that fired. A scheduling fires at
    /// most once.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerHandle> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                Some(TimerHandle(self.generation))
            }
            _ => None,
        }
    }
}
