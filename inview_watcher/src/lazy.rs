// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owning controller: watcher + probe + callback in one value.

use alloc::vec::Vec;
use core::fmt;

use inview_viewport::ViewportProbe;

use crate::watcher::{VisibilityWatcher, WatchSignal, WatcherOptions};

/// Binds a [`VisibilityWatcher`] to a probe and a callback.
///
/// [`VisibilityWatcher`] itself only *reports* the element that entered the
/// viewport; `LazyLoad` is the one-call surface for hosts that want the
/// classic contract instead: construct with the element collection, a
/// callback, and an optional startup delay, then forward scroll/resize
/// events and poll. When a check finds a visible element, the callback is
/// invoked with that element, once, and the underlying watcher disarms.
///
/// The initial viewport height for the resize filter is read from the probe
/// at construction.
pub struct LazyLoad<E, P, F> {
    watcher: VisibilityWatcher<E>,
    probe: P,
    callback: F,
}

impl<E, P, F> LazyLoad<E, P, F>
where
    P: ViewportProbe<E>,
    F: FnMut(&E),
{
    /// Creates a controller over `elements`, armed immediately.
    #[must_use]
    pub fn new(elements: Vec<E>, probe: P, callback: F) -> Self {
        let height = probe.viewport_height();
        Self {
            watcher: VisibilityWatcher::new(elements, height),
            probe,
            callback,
        }
    }

    /// Creates a controller whose arming is deferred by `delay` ticks after
    /// `now`. Signals arriving before the delay elapses are dropped.
    #[must_use]
    pub fn with_delay(elements: Vec<E>, probe: P, callback: F, delay: u64, now: u64) -> Self {
        let height = probe.viewport_height();
        let options = WatcherOptions {
            arm_delay: Some(delay),
            ..WatcherOptions::default()
        };
        Self {
            watcher: VisibilityWatcher::with_options(elements, height, options, now),
            probe,
            callback,
        }
    }

    /// Forwards a scroll signal at time `now`.
    pub fn on_scroll(&mut self, now: u64) {
        self.watcher.on_signal(WatchSignal::Scroll, now);
    }

    /// Forwards a resize signal at time `now`.
    pub fn on_resize(&mut self, now: u64) {
        self.watcher.on_signal(WatchSignal::Resize, now);
    }

    /// Advances to time `now`, running the debounced check if it is due and
    /// invoking the callback on the first visible element.
    ///
    /// Returns `true` when the callback fired (which happens at most once
    /// over the controller's lifetime).
    pub fn poll(&mut self, now: u64) -> bool {
        match self.watcher.poll(now, &self.probe) {
            Some(element) => {
                (self.callback)(element);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while the underlying watcher is listening.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.watcher.is_armed()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.watcher.next_deadline()
    }

    /// Returns the underlying watcher for state inspection.
    #[must_use]
    pub fn watcher(&self) -> &VisibilityWatcher<E> {
        &self.watcher
    }

    /// Returns the probe.
    #[must_use]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Returns the probe mutably, for hosts that update synthetic geometry
    /// between events.
    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }
}

impl<E: fmt::Debug, P: fmt::Debug, F> fmt::Debug for LazyLoad<E, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyLoad")
            .field("watcher", &self.watcher)
            .field("probe", &self.probe)
            .finish_non_exhaustive()
    }
}
