// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot deadline slot with cancel-and-reschedule semantics.

/// Holds at most one pending deadline.
///
/// A `DeadlineSlot` is the explicit, owned form of a "single shared timer
/// handle": it lives as a plain field on whatever owns it, and rescheduling
/// is a single method call that atomically replaces any pending deadline.
/// Two slots never interfere with each other.
///
/// Time is supplied by the caller as a monotonic `u64` tick count. The slot
/// never reads a clock.
///
/// ## Semantics
///
/// - [`schedule`](Self::schedule) overwrites any pending deadline with
///   `now + delay` (saturating).
/// - [`fire`](Self::fire) returns `true` the first time it is called with
///   `now` at or past the pending deadline, and clears the slot; every
///   other call returns `false`. Firing is level-triggered, so a host that
///   polls late still observes the deadline.
/// - [`cancel`](Self::cancel) clears the slot and is a no-op when empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeadlineSlot {
    deadline: Option<u64>,
}

impl DeadlineSlot {
    /// Creates an empty slot with no pending deadline.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedules a deadline `delay` ticks after `now`, replacing any
    /// pending deadline.
    pub fn schedule(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Clears the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns the pending deadline, if any.
    ///
    /// Hosts that sleep between events can use this to schedule their next
    /// wake-up instead of polling.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the slot if the pending deadline has been reached.
    ///
    /// Returns `true` exactly once per scheduled deadline, the first time
    /// `now >= deadline`, clearing the slot in the process.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeadlineSlot;

    #[test]
    fn new_slot_is_empty() {
        let slot = DeadlineSlot::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.deadline(), None);
    }

    #[test]
    fn schedule_sets_deadline_relative_to_now() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(100, 300);
        assert_eq!(slot.deadline(), Some(400));
        assert!(slot.is_pending());
    }

    #[test]
    fn schedule_replaces_pending_deadline() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 300);
        slot.schedule(200, 300);
        assert_eq!(slot.deadline(), Some(500));
    }

    #[test]
    fn fire_before_deadline_is_false_and_keeps_slot() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 300);
        assert!(!slot.fire(299));
        assert!(slot.is_pending());
    }

    #[test]
    fn fire_at_deadline_is_true_exactly_once() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 300);
        assert!(slot.fire(300));
        assert!(!slot.is_pending());
        assert!(!slot.fire(300));
        assert!(!slot.fire(1000));
    }

    #[test]
    fn fire_past_deadline_still_fires() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 300);
        assert!(slot.fire(10_000));
    }

    #[test]
    fn cancel_clears_pending_deadline() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(0, 300);
        slot.cancel();
        assert!(!slot.is_pending());
        assert!(!slot.fire(300));
    }

    #[test]
    fn cancel_on_empty_slot_is_a_noop() {
        let mut slot = DeadlineSlot::new();
        slot.cancel();
        assert!(!slot.is_pending());
    }

    #[test]
    fn empty_slot_never_fires() {
        let mut slot = DeadlineSlot::new();
        assert!(!slot.fire(0));
        assert!(!slot.fire(u64::MAX));
    }

    #[test]
    fn schedule_saturates_near_tick_overflow() {
        let mut slot = DeadlineSlot::new();
        slot.schedule(u64::MAX - 10, 300);
        assert_eq!(slot.deadline(), Some(u64::MAX));
        assert!(slot.fire(u64::MAX));
    }
}
