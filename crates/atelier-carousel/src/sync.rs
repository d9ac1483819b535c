//! Scroll-to-state synchronization.
//!
//! Converts the continuous horizontal scroll offset reported by the
//! presentation layer into the visual state of the onboarding screen: a
//! crossfade pair for the backdrop layers while a gesture is in flight, and
//! a discrete page index plus explore-button visibility once it settles.
//!
//! The two paths are deliberately separate. The crossfade must track every
//! intermediate pointer position to stay smooth, while the page indicator
//! and the button must only change at rest so sub-pixel offsets during a
//! fling cannot make them flicker.

/// Crossfade opacities for one adjacent pair of backdrop layers.
///
/// `fade_out` applies to `from_layer` (the page being left), `fade_in` to
/// `to_layer` (the page being entered). The two always sum to one, so the
/// backdrop stack keeps full coverage throughout a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadePair {
    /// Layer index of the page being left.
    pub from_layer: usize,
    /// Layer index of the page being entered. Always `from_layer + 1` and
    /// always a valid layer.
    pub to_layer: usize,
    /// Opacity for `from_layer`, in `[0, 1]`.
    pub fade_out: f64,
    /// Opacity for `to_layer`, in `[0, 1]`.
    pub fade_in: f64,
}

/// The discrete result of a settled gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleOutcome {
    /// The page the carousel came to rest on.
    pub page_index: usize,
    /// Whether the explore button should be visible. True exactly on the
    /// final page.
    pub show_call_to_action: bool,
}

/// Stateless synchronizer between scroll offsets and screen state.
///
/// Holds nothing but the page count; every method is a pure function of
/// its `(offset, page width)` arguments, so results can be re-derived at
/// any instant and calls are idempotent.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSync {
    page_count: usize,
}

impl ScrollSync {
    /// Creates a synchronizer for a carousel with `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    /// Returns the page count this synchronizer was built for.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Derives the page index for an offset, clamped to `[0, count - 1]`.
    ///
    /// Total over all inputs: overscroll past either end clamps to the
    /// nearest valid page, and a non-positive width yields page zero.
    pub fn current_index(&self, offset_x: f64, page_width: f64) -> usize {
        if self.page_count == 0 || page_width <= 0.0 {
            return 0;
        }
        let raw = (offset_x / page_width).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(self.page_count - 1)
        }
    }

    /// Continuous path: maps a scroll sample to a backdrop crossfade.
    ///
    /// Returns `None` (the neutral result, no layers touched) when there is
    /// no next page to fade toward: on or past the last page, on a carousel
    /// with fewer than two pages, or for a non-positive page width.
    pub fn on_scroll(&self, offset_x: f64, page_width: f64) -> Option<FadePair> {
        if page_width <= 0.0 {
            tracing::trace!(page_width, "ignoring scroll sample with non-positive page width");
            return None;
        }
        if self.page_count < 2 {
            return None;
        }

        let index = self.current_index(offset_x, page_width);
        if index >= self.page_count - 1 {
            return None;
        }

        // Fractional progress from page `index` toward `index + 1`, clamped
        // against bounce overscroll.
        let fade_in = ((offset_x - page_width * index as f64) / page_width).clamp(0.0, 1.0);

        Some(FadePair {
            from_layer: index,
            to_layer: index + 1,
            fade_out: 1.0 - fade_in,
            fade_in,
        })
    }

    /// Discrete path: maps the offset a gesture settled at to the page
    /// index and explore-button visibility.
    ///
    /// Idempotent; `None` only for an empty carousel or a non-positive
    /// page width.
    pub fn on_settle(&self, offset_x: f64, page_width: f64) -> Option<SettleOutcome> {
        if page_width <= 0.0 || self.page_count == 0 {
            return None;
        }

        let page_index = self.current_index(offset_x, page_width);
        Some(SettleOutcome {
            page_index,
            show_call_to_action: page_index == self.page_count - 1,
        })
    }
}
