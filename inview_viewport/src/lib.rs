// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=inview_viewport --heading-base-level=0

//! Inview Viewport: injected viewport geometry for visibility checks.
//!
//! This crate abstracts the environment reads a scroll-into-view check
//! needs (viewport height, vertical scroll offset, and per-element bounding
//! rectangles) behind the [`ViewportProbe`] trait, so the logic consuming
//! them never touches a real display surface and can be exercised with
//! synthetic geometry.
//!
//! The core pieces are:
//!
//! - [`ViewportProbe`]: the capability trait. Implementations report the
//!   viewport's height, its vertical scroll offset (which may be
//!   unobtainable), and each element's bounding rectangle *relative to the
//!   viewport*, the analogue of a bounding client rect. The provided
//!   [`viewport_bottom`](ViewportProbe::viewport_bottom) method combines
//!   offset and height into the document-space position of the viewport's
//!   bottom edge.
//! - [`ScrollReadings`]: raw scroll-offset candidates in fallback order.
//!   Environments differ in which reading they expose; [`ScrollReadings::resolve`]
//!   picks the primary window reading when present and otherwise the first
//!   secondary that actually yields a number.
//! - [`FixedViewport`]: a synthetic probe backed by a keyed map of
//!   document-space rectangles. It is the deterministic test double for
//!   anything written against [`ViewportProbe`], and serves headless hosts
//!   that already know their geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_viewport::{FixedViewport, ViewportProbe};
//! use kurbo::Rect;
//!
//! let mut viewport = FixedViewport::new(600.0);
//! viewport.insert_element("hero", Rect::new(0.0, 900.0, 320.0, 1100.0));
//!
//! // Nothing scrolled yet: the element's top edge sits 900px below the
//! // viewport origin.
//! assert_eq!(viewport.element_rect(&"hero").y0, 900.0);
//! assert_eq!(viewport.viewport_bottom(), Some(600.0));
//!
//! // Scroll down 400px: the element is now 500px from the viewport top.
//! viewport.set_scroll_offset(Some(400.0));
//! assert_eq!(viewport.element_rect(&"hero").y0, 500.0);
//! assert_eq!(viewport.viewport_bottom(), Some(1000.0));
//! ```
//!
//! All coordinates are `f64` logical pixels with Y growing downward.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod fixed;
mod probe;
mod readings;

pub use fixed::FixedViewport;
pub use probe::ViewportProbe;
pub use readings::ScrollReadings;
