// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inview_debounce --heading-base-level=0

//! Inview Debounce: single-slot deadline and debounce primitives.
//!
//! This crate provides the timing half of a host-driven event pipeline: a
//! one-shot [`DeadlineSlot`] holding at most one pending deadline, and a
//! [`Debouncer`] that wraps a slot with a fixed quiescence window. Neither
//! type reads a clock. The host supplies a monotonic `u64` tick count
//! (conventionally milliseconds) on every call, which keeps behavior fully
//! deterministic under test and lets hosts drive the primitives from any
//! runtime, from an event loop to a hand-rolled test clock.
//!
//! The core contract is *cancel-and-reschedule*: scheduling while a deadline
//! is already pending replaces it. There is never more than one pending
//! deadline per slot, so a burst of triggering signals collapses into a
//! single firing once the signals go quiet.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_debounce::Debouncer;
//!
//! let mut debounce = Debouncer::new(300);
//!
//! // A burst of signals keeps pushing the deadline out.
//! debounce.poke(0);
//! debounce.poke(100);
//! debounce.poke(250);
//!
//! // Nothing fires while the burst is still fresh.
//! assert!(!debounce.fire(500));
//!
//! // The deadline from the last poke (250 + 300) fires exactly once.
//! assert!(debounce.fire(550));
//! assert!(!debounce.fire(551));
//! ```
//!
//! Hosts that sleep between events can query [`DeadlineSlot::deadline`] (or
//! [`Debouncer::deadline`]) to learn when to wake next instead of polling.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod debounce;
mod slot;

pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, Debouncer};
pub use slot::DeadlineSlot;
