// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debouncer: a deadline slot with a fixed quiescence window.

use crate::slot::DeadlineSlot;

/// Default quiescence window, in ticks.
pub const DEFAULT_DEBOUNCE_WINDOW: u64 = 300;

/// Collapses a burst of signals into one firing after a quiet period.
///
/// Each [`poke`](Self::poke) reschedules the single pending deadline to
/// `now + window`, so the debouncer fires only once no new signal has
/// arrived for a full window. At most one firing is ever pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Debouncer {
    slot: DeadlineSlot,
    window: u64,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window, in ticks.
    #[must_use]
    pub const fn new(window: u64) -> Self {
        Self {
            slot: DeadlineSlot::new(),
            window,
        }
    }

    /// Returns the quiescence window, in ticks.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// Registers a triggering signal at `now`, rescheduling the deadline to
    /// `now + window`.
    pub fn poke(&mut self, now: u64) {
        self.slot.schedule(now, self.window);
    }

    /// Fires if the quiet period has elapsed. See [`DeadlineSlot::fire`].
    pub fn fire(&mut self, now: u64) -> bool {
        self.slot.fire(now)
    }

    /// Cancels the pending firing, if any.
    pub fn cancel(&mut self) {
        self.slot.cancel();
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.slot.deadline()
    }

    /// Returns `true` while a firing is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DEBOUNCE_WINDOW, Debouncer};

    #[test]
    fn default_uses_default_window() {
        let debounce = Debouncer::default();
        assert_eq!(debounce.window(), DEFAULT_DEBOUNCE_WINDOW);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn fires_after_quiet_period() {
        let mut debounce = Debouncer::new(300);
        debounce.poke(0);
        assert!(!debounce.fire(299));
        assert!(debounce.fire(300));
    }

    #[test]
    fn rapid_pokes_collapse_into_single_firing() {
        let mut debounce = Debouncer::new(300);
        // Ten signals inside one window.
        for t in (0..100).step_by(10) {
            debounce.poke(t);
        }
        // The deadline tracks the last poke, not the first.
        assert_eq!(debounce.deadline(), Some(390));
        assert!(!debounce.fire(389));
        assert!(debounce.fire(390));
        assert!(!debounce.fire(391));
    }

    #[test]
    fn poke_after_firing_schedules_again() {
        let mut debounce = Debouncer::new(300);
        debounce.poke(0);
        assert!(debounce.fire(300));
        debounce.poke(1000);
        assert!(debounce.fire(1300));
    }

    #[test]
    fn cancel_drops_pending_firing() {
        let mut debounce = Debouncer::new(300);
        debounce.poke(0);
        debounce.cancel();
        assert!(!debounce.fire(300));
    }

    #[test]
    fn zero_window_fires_immediately() {
        let mut debounce = Debouncer::new(0);
        debounce.poke(42);
        assert!(debounce.fire(42));
    }
}
