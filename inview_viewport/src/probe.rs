// Copyright 2026 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport probe capability trait.

use kurbo::Rect;

/// Read access to viewport and element geometry.
///
/// A probe answers the three environment questions a visibility check needs,
/// for a caller-chosen element handle type `E`:
///
/// - how tall is the viewport,
/// - how far has it scrolled vertically (if that can be read at all), and
/// - where is a given element's bounding rectangle, *relative to the
///   viewport* (the analogue of a bounding client rect).
///
/// Implementations wrap a real display surface, or synthetic geometry such
/// as [`FixedViewport`](crate::FixedViewport). Probes are read-only; all
/// methods take `&self`.
pub trait ViewportProbe<E> {
    /// Returns the viewport's height.
    fn viewport_height(&self) -> f64;

    /// Returns the viewport's vertical scroll offset.
    ///
    /// `None` means no reading is obtainable, even through fallbacks (see
    /// [`ScrollReadings`](crate::ScrollReadings)). Callers are expected to
    /// treat that as "visibility cannot be established" rather than as an
    /// error.
    fn scroll_offset(&self) -> Option<f64>;

    /// Returns the element's bounding rectangle relative to the viewport.
    fn element_rect(&self, element: &E) -> Rect;

    /// Returns the document-space position of the viewport's bottom edge,
    /// or `None` when the scroll offset is unobtainable.
    fn viewport_bottom(&self) -> Option<f64> {
        self.scroll_offset()
            .map(|offset| offset + self.viewport_height())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportProbe;
    use kurbo::Rect;

    struct StubProbe {
        height: f64,
        offset: Option<f64>,
    }

    impl ViewportProbe<u32> for StubProbe {
        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn scroll_offset(&self) -> Option<f64> {
            self.offset
        }

        fn element_rect(&self, _element: &u32) -> Rect {
            Rect::ZERO
        }
    }

    #[test]
    fn viewport_bottom_adds_offset_and_height() {
        let probe = StubProbe {
            height: 600.0,
            offset: Some(250.0),
        };
        assert_eq!(probe.viewport_bottom(), Some(850.0));
    }

    #[test]
    fn viewport_bottom_is_none_without_scroll_offset() {
        let probe = StubProbe {
            height: 600.0,
            offset: None,
        };
        assert_eq!(probe.viewport_bottom(), None);
    }
}
