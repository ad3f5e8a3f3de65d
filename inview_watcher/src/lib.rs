// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inview_watcher --heading-base-level=0

//! Inview Watcher: debounced scroll-into-view detection that fires once.
//!
//! This crate watches a fixed, ordered set of elements and reports the first
//! one whose top edge enters the viewport, exactly once, after which the
//! watcher permanently stands down. It is the classic "reveal on first
//! scroll-into-view" trigger: reveal a banner or start loading a
//! below-the-fold region the first time the user scrolls far enough.
//!
//! The core pieces are:
//!
//! - [`VisibilityWatcher`]: the state machine. It consumes scroll/resize
//!   signals ([`WatchSignal`]) with host-supplied timestamps, debounces them
//!   through a single rescheduling deadline, and on each elapsed check walks
//!   the watched set in order against the viewport bottom. Geometry comes
//!   from an injected [`ViewportProbe`](inview_viewport::ViewportProbe), so
//!   the whole machine runs deterministically without a display surface.
//! - [`WatcherOptions`]: the debounce window (300 ticks by default) and an
//!   optional arming delay that defers signal handling after construction.
//! - [`LazyLoad`]: an owning controller that binds a watcher to a probe and
//!   a callback, for hosts that want the one-call surface: construct with a
//!   callback and optional delay, forward scroll/resize, poll.
//!
//! ## Semantics
//!
//! - An element is visible once `viewport_bottom > element_top`, where the
//!   element top is viewport-relative and the viewport bottom is the scroll
//!   offset plus the viewport height.
//! - Checks stop at the *first* visible element in watched-set order. That
//!   element is reported and the watcher disarms; later elements are never
//!   reported, even if they are already visible in the same pass.
//! - Once disarmed, whether by a report or by [`VisibilityWatcher::disarm`],
//!   the watcher ignores all further signals and polls. There is no
//!   re-arming.
//! - Resize signals are filtered: a resize-triggered check only runs when
//!   the viewport height actually changed since the resize path last saw
//!   it, guarding against environments that fire resize spuriously.
//! - An empty watched set never reports and never disarms.
//! - An unobtainable scroll offset degrades silently: checks match nothing
//!   and the watcher stays armed.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_viewport::FixedViewport;
//! use inview_watcher::{VisibilityWatcher, WatchSignal};
//! use kurbo::Rect;
//!
//! let mut viewport = FixedViewport::new(600.0);
//! viewport.insert_element("teaser", Rect::new(0.0, 900.0, 320.0, 1100.0));
//!
//! let mut watcher = VisibilityWatcher::new(vec!["teaser"], 600.0);
//!
//! // The user scrolls; nothing is visible yet and nothing fires.
//! watcher.on_signal(WatchSignal::Scroll, 0);
//! assert_eq!(watcher.poll(300, &viewport), None);
//!
//! // Scroll far enough that the element's top clears the viewport bottom.
//! viewport.set_scroll_offset(Some(400.0));
//! watcher.on_signal(WatchSignal::Scroll, 1000);
//! assert_eq!(watcher.poll(1300, &viewport), Some(&"teaser"));
//!
//! // The watcher is now permanently disarmed.
//! watcher.on_signal(WatchSignal::Scroll, 2000);
//! assert_eq!(watcher.poll(2300, &viewport), None);
//! ```
//!
//! Hosts integrate by translating their native scroll/resize events into
//! [`VisibilityWatcher::on_signal`] calls and either polling on a cadence or
//! sleeping until [`VisibilityWatcher::next_deadline`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lazy;
mod watcher;

pub use lazy::LazyLoad;
pub use watcher::{VisibilityWatcher, WatchSignal, WatcherOptions};
