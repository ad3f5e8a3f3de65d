// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visibility watcher state machine.

use alloc::vec::Vec;

use inview_debounce::{DEFAULT_DEBOUNCE_WINDOW, DeadlineSlot, Debouncer};
use inview_viewport::ViewportProbe;

/// A viewport signal that can trigger a debounced visibility check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WatchSignal {
    /// The viewport scrolled.
    Scroll,
    /// The viewport may have been resized.
    Resize,
}

/// Construction options for [`VisibilityWatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatcherOptions {
    /// Quiescence window for the debounced check, in ticks.
    pub debounce_window: u64,
    /// Defers arming by this many ticks after construction. Signals
    /// arriving before the delay elapses are dropped.
    pub arm_delay: Option<u64>,
}

impl Default for WatcherOptions {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            arm_delay: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WatchState {
    /// Arming delay still pending; signals are dropped.
    Waiting,
    /// Listening for signals.
    Armed,
    /// Permanently stood down.
    Disarmed,
}

/// Watches an ordered element set and reports the first one to enter the
/// viewport, once.
///
/// The watcher is a host-driven state machine: the host feeds it
/// [`WatchSignal`]s with monotonic timestamps and then calls
/// [`poll`](Self::poll) (with the current time and a geometry probe) either
/// on a cadence or when [`next_deadline`](Self::next_deadline) elapses.
/// Signals are debounced through a single rescheduling deadline, so a burst
/// of scrolling costs one check.
///
/// Membership of the watched set is fixed at construction. The first check
/// that finds a visible element reports it and permanently disarms the
/// watcher; an empty set leaves the watcher armed forever.
///
/// Each watcher owns its own timers. Independent watcher instances never
/// share scheduling state.
#[derive(Clone, Debug)]
pub struct VisibilityWatcher<E> {
    elements: Vec<E>,
    debounce: Debouncer,
    pending: Option<WatchSignal>,
    arm_delay: DeadlineSlot,
    state: WatchState,
    last_height: f64,
}

impl<E> VisibilityWatcher<E> {
    /// Creates a watcher over `elements`, armed immediately, with default
    /// options.
    ///
    /// `initial_viewport_height` seeds the resize filter: the first
    /// resize-triggered check runs only if the height has moved away from
    /// this value.
    #[must_use]
    pub fn new(elements: Vec<E>, initial_viewport_height: f64) -> Self {
        Self::with_options(
            elements,
            initial_viewport_height,
            WatcherOptions::default(),
            0,
        )
    }

    /// Creates a watcher with explicit options.
    ///
    /// When `options.arm_delay` is set, the watcher starts in a waiting
    /// state and arms once the delay has elapsed past `now`; signals
    /// arriving earlier are dropped. Otherwise the watcher is armed
    /// immediately and `now` is unused.
    #[must_use]
    pub fn with_options(
        elements: Vec<E>,
        initial_viewport_height: f64,
        options: WatcherOptions,
        now: u64,
    ) -> Self {
        let mut arm_delay = DeadlineSlot::new();
        let state = match options.arm_delay {
            Some(delay) => {
                arm_delay.schedule(now, delay);
                WatchState::Waiting
            }
            None => WatchState::Armed,
        };
        Self {
            elements,
            debounce: Debouncer::new(options.debounce_window),
            pending: None,
            arm_delay,
            state,
            last_height: initial_viewport_height,
        }
    }

    /// Returns the watched elements in check order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Returns `true` while the arming delay is still pending.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.state == WatchState::Waiting
    }

    /// Returns `true` while the watcher is listening for signals.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state == WatchState::Armed
    }

    /// Returns `true` once the watcher has permanently stood down.
    #[must_use]
    pub fn is_disarmed(&self) -> bool {
        self.state == WatchState::Disarmed
    }

    /// Returns the quiescence window of the debounced check, in ticks.
    #[must_use]
    pub fn debounce_window(&self) -> u64 {
        self.debounce.window()
    }

    /// Returns the viewport height the resize filter last observed.
    #[must_use]
    pub fn last_viewport_height(&self) -> f64 {
        self.last_height
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts that sleep between events can use this as their next wake-up
    /// time instead of polling on a cadence.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.arm_delay.deadline(), self.debounce.deadline()) {
            (Some(arm), Some(check)) => Some(arm.min(check)),
            (arm, check) => arm.or(check),
        }
    }

    /// Feeds a viewport signal to the watcher at time `now`.
    ///
    /// While armed, this reschedules the debounced check and records the
    /// signal kind; when two signals race within one window, the last one
    /// decides whether the eventual check is resize-filtered. Signals are
    /// dropped while waiting for the arming delay and ignored forever once
    /// disarmed.
    pub fn on_signal(&mut self, signal: WatchSignal, now: u64) {
        self.tick_arm(now);
        if self.state != WatchState::Armed {
            return;
        }
        self.pending = Some(signal);
        self.debounce.poke(now);
    }

    /// Advances the watcher to time `now` and runs the check routine if the
    /// debounced deadline has elapsed.
    ///
    /// Returns the first element (in watched-set order) whose top edge has
    /// entered the viewport, reporting it exactly once: a successful check
    /// disarms the watcher before returning. Returns `None` when no check
    /// was due, the check was resize-filtered, the scroll offset was
    /// unobtainable, or no element was visible; in all of those cases the
    /// watcher stays armed.
    pub fn poll<P>(&mut self, now: u64, probe: &P) -> Option<&E>
    where
        P: ViewportProbe<E> + ?Sized,
    {
        self.tick_arm(now);
        if self.state != WatchState::Armed {
            return None;
        }
        if !self.debounce.fire(now) {
            return None;
        }
        let signal = self.pending.take()?;
        if signal == WatchSignal::Resize {
            let height = probe.viewport_height();
            if height == self.last_height {
                return None;
            }
            self.last_height = height;
        }
        let index = self.run_check(probe)?;
        self.disarm();
        Some(&self.elements[index])
    }

    /// Permanently stands the watcher down, cancelling any pending
    /// deadlines. Idempotent.
    pub fn disarm(&mut self) {
        self.state = WatchState::Disarmed;
        self.pending = None;
        self.debounce.cancel();
        self.arm_delay.cancel();
    }

    fn tick_arm(&mut self, now: u64) {
        if self.state == WatchState::Waiting && self.arm_delay.fire(now) {
            self.state = WatchState::Armed;
        }
    }

    fn run_check<P>(&self, probe: &P) -> Option<usize>
    where
        P: ViewportProbe<E> + ?Sized,
    {
        let bottom = probe.viewport_bottom()?;
        self.elements
            .iter()
            .position(|element| bottom > probe.element_rect(element).y0)
    }
}
