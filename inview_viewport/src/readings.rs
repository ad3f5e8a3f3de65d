// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-offset fallback resolution.

/// Raw vertical scroll-offset candidates, in fallback order.
///
/// Environments differ in which scroll reading they expose. The window's own
/// vertical scroll position is the primary source; when it is absent, the
/// document root and then the body's parent are consulted, taking whichever
/// first provides a numeric value. Probe implementations collect whatever
/// their environment offers into a `ScrollReadings` and call
/// [`resolve`](Self::resolve).
///
/// When every candidate is absent, resolution yields `None` and callers fall
/// into silent degradation: visibility checks simply never match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollReadings {
    /// The window's own vertical scroll position, when readable.
    pub window_offset: Option<f64>,
    /// The document root element's scroll offset.
    pub root_scroll_top: Option<f64>,
    /// The scroll offset of the body element's parent.
    pub body_parent_scroll_top: Option<f64>,
}

impl ScrollReadings {
    /// A reading set with every candidate absent.
    pub const EMPTY: Self = Self {
        window_offset: None,
        root_scroll_top: None,
        body_parent_scroll_top: None,
    };

    /// Creates a reading set with only the primary window offset present.
    #[must_use]
    pub const fn from_window_offset(offset: f64) -> Self {
        Self {
            window_offset: Some(offset),
            root_scroll_top: None,
            body_parent_scroll_top: None,
        }
    }

    /// Resolves the candidates in fallback order.
    ///
    /// Returns the window reading when present, otherwise the first
    /// secondary reading that yields a number, otherwise `None`.
    #[must_use]
    pub fn resolve(&self) -> Option<f64> {
        self.window_offset
            .or(self.root_scroll_top)
            .or(self.body_parent_scroll_top)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollReadings;

    #[test]
    fn window_offset_wins_over_fallbacks() {
        let readings = ScrollReadings {
            window_offset: Some(120.0),
            root_scroll_top: Some(999.0),
            body_parent_scroll_top: Some(888.0),
        };
        assert_eq!(readings.resolve(), Some(120.0));
    }

    #[test]
    fn root_reading_used_when_window_offset_absent() {
        let readings = ScrollReadings {
            window_offset: None,
            root_scroll_top: Some(75.0),
            body_parent_scroll_top: Some(888.0),
        };
        assert_eq!(readings.resolve(), Some(75.0));
    }

    #[test]
    fn body_parent_reading_is_the_last_resort() {
        let readings = ScrollReadings {
            window_offset: None,
            root_scroll_top: None,
            body_parent_scroll_top: Some(42.0),
        };
        assert_eq!(readings.resolve(), Some(42.0));
    }

    #[test]
    fn all_absent_resolves_to_none() {
        assert_eq!(ScrollReadings::EMPTY.resolve(), None);
        assert_eq!(ScrollReadings::default().resolve(), None);
    }

    #[test]
    fn zero_is_a_valid_reading() {
        let readings = ScrollReadings::from_window_offset(0.0);
        assert_eq!(readings.resolve(), Some(0.0));
    }
}
