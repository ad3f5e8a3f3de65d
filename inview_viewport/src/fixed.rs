// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic viewport probe backed by a keyed geometry map.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Rect, Vec2};

use crate::probe::ViewportProbe;
use crate::readings::ScrollReadings;

/// A deterministic [`ViewportProbe`] over caller-supplied geometry.
///
/// Elements are registered with *document-space* bounding rectangles;
/// [`element_rect`](ViewportProbe::element_rect) translates them by the
/// current scroll offset to produce viewport-relative rectangles, the way a
/// real surface would report them. Mutators let tests scroll and resize the
/// synthetic viewport between checks.
///
/// The scroll offset is held as [`ScrollReadings`] and resolved through the
/// usual fallback order, so tests can also simulate environments where the
/// primary window reading is missing.
///
/// Elements without recorded geometry report a rectangle infinitely far
/// below the viewport, so they are never considered visible.
#[derive(Clone, Debug)]
pub struct FixedViewport<E> {
    height: f64,
    readings: ScrollReadings,
    rects: HashMap<E, Rect>,
}

impl<E: Eq + Hash> FixedViewport<E> {
    /// Creates a viewport of the given height, unscrolled.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            readings: ScrollReadings::from_window_offset(0.0),
            rects: HashMap::new(),
        }
    }

    /// Sets the viewport height.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Sets the primary window scroll reading; `None` simulates an
    /// environment where no reading is obtainable at all.
    pub fn set_scroll_offset(&mut self, offset: Option<f64>) {
        self.readings = match offset {
            Some(offset) => ScrollReadings::from_window_offset(offset),
            None => ScrollReadings::EMPTY,
        };
    }

    /// Sets the full scroll reading set, for simulating environments where
    /// only a fallback reading is available.
    pub fn set_scroll_readings(&mut self, readings: ScrollReadings) {
        self.readings = readings;
    }

    /// Registers an element's document-space bounding rectangle, replacing
    /// any previous geometry for the same element.
    pub fn insert_element(&mut self, element: E, rect: Rect) {
        self.rects.insert(element, rect);
    }

    /// Returns the number of elements with recorded geometry.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.rects.len()
    }
}

impl<E: Eq + Hash> ViewportProbe<E> for FixedViewport<E> {
    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_offset(&self) -> Option<f64> {
        self.readings.resolve()
    }

    fn element_rect(&self, element: &E) -> Rect {
        let scroll = self.readings.resolve().unwrap_or(0.0);
        match self.rects.get(element) {
            Some(rect) => *rect + Vec2::new(0.0, -scroll),
            None => Rect::new(0.0, f64::INFINITY, 0.0, f64::INFINITY),
        }
    }
}
