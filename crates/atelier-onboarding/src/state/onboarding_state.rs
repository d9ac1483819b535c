//! Main application state for the onboarding screen.

use atelier_carousel::{CarouselModel, ScrollSync};

use crate::motion::layout::OVERDRAG_PX;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The onboarding carousel.
    #[default]
    Onboarding,
    /// The main app screen, entered once via the explore button.
    Main,
}

/// An in-flight drag gesture on the carousel strip.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    /// Pointer x position when the drag started.
    start_x: f64,
    /// Strip offset when the drag started.
    start_offset: f64,
}

/// Main application state.
///
/// Owns the carousel model and the synchronizer, and tracks the continuous
/// strip offset alongside the discrete settled state. Everything visual is
/// derived from the offset on demand; the only stored view state is what
/// must survive between renders.
#[derive(Debug, Clone)]
pub struct OnboardingState {
    /// The quote catalog.
    model: CarouselModel,

    /// Offset-to-state synchronizer for the catalog.
    sync: ScrollSync,

    /// Which screen is shown.
    pub screen: Screen,

    /// Continuous horizontal offset of the carousel strip, in logical px.
    pub offset_x: f64,

    /// Logical width of one page.
    pub page_width: f64,

    /// Page the carousel last settled on. Only changes on settle, never
    /// mid-gesture.
    pub page_index: usize,

    /// Whether the explore button is shown. Derived on settle from the
    /// settled page being the last one.
    pub show_explore: bool,

    /// The active drag gesture, if any.
    drag: Option<DragGesture>,
}

impl OnboardingState {
    /// Creates the state for a catalog, settled on the first page.
    pub fn new(model: CarouselModel, page_width: f64) -> Self {
        let sync = ScrollSync::new(model.count());
        let mut state = Self {
            model,
            sync,
            screen: Screen::Onboarding,
            offset_x: 0.0,
            page_width,
            page_index: 0,
            show_explore: false,
            drag: None,
        };
        state.settle();
        state
    }

    /// Returns the catalog.
    pub fn model(&self) -> &CarouselModel {
        &self.model
    }

    /// Largest settled offset: the left edge of the last page.
    pub fn max_offset(&self) -> f64 {
        self.model.count().saturating_sub(1) as f64 * self.page_width
    }

    /// Jumps directly to a page (clamped into range) and settles there.
    pub fn jump_to_page(&mut self, page: usize) {
        let page = page.min(self.model.count().saturating_sub(1));
        self.offset_x = page as f64 * self.page_width;
        self.settle();
    }

    /// Whether a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag gesture at pointer position `x`.
    pub fn begin_drag(&mut self, x: f64) {
        self.drag = Some(DragGesture {
            start_x: x,
            start_offset: self.offset_x,
        });
    }

    /// Updates the strip offset from the pointer position of an active
    /// drag. Dragging left moves the strip toward later pages; the offset
    /// is soft-clamped a fixed margin past either end.
    pub fn update_drag(&mut self, x: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let dragged = drag.start_offset - (x - drag.start_x);
        self.offset_x = dragged.clamp(-OVERDRAG_PX, self.max_offset() + OVERDRAG_PX);
    }

    /// Ends the active drag and returns the offset of the nearest page
    /// boundary as the snap target. Returns `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<f64> {
        self.drag.take()?;
        Some(self.nearest_page_offset())
    }

    /// Offset of the page boundary nearest to the current offset.
    fn nearest_page_offset(&self) -> f64 {
        if self.page_width <= 0.0 || self.model.count() == 0 {
            return 0.0;
        }
        let nearest = (self.offset_x / self.page_width).round();
        let page = if nearest.is_nan() || nearest < 0.0 {
            0
        } else {
            (nearest as usize).min(self.model.count() - 1)
        };
        page as f64 * self.page_width
    }

    /// Sets the strip offset directly. Used by the snap tween.
    pub fn set_offset(&mut self, offset_x: f64) {
        self.offset_x = offset_x;
    }

    /// Settles the discrete state from the current offset: the page
    /// indicator and the explore button only ever change here.
    pub fn settle(&mut self) {
        let Some(outcome) = self.sync.on_settle(self.offset_x, self.page_width) else {
            return;
        };
        if outcome.page_index != self.page_index {
            if let Ok(item) = self.model.item_at(outcome.page_index) {
                tracing::debug!(page = outcome.page_index, title = %item.title, "settled on page");
            }
        }
        self.page_index = outcome.page_index;
        self.show_explore = outcome.show_call_to_action;
    }

    /// Opacity of one backdrop layer, derived from the current offset.
    ///
    /// Mid-swipe the crossfade pair drives its two layers and every other
    /// layer is fully transparent; at rest (or past the last fade target)
    /// the current page's layer is opaque.
    pub fn layer_opacity(&self, layer: usize) -> f64 {
        match self.sync.on_scroll(self.offset_x, self.page_width) {
            Some(pair) if layer == pair.from_layer => pair.fade_out,
            Some(pair) if layer == pair.to_layer => pair.fade_in,
            Some(_) => 0.0,
            None => {
                if layer == self.sync.current_index(self.offset_x, self.page_width) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// One-shot transition into the main screen. Returns whether this call
    /// performed the transition; repeat activations are no-ops.
    pub fn activate_explore(&mut self) -> bool {
        if self.screen == Screen::Onboarding {
            self.screen = Screen::Main;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::default_model;

    const PAGE_WIDTH: f64 = 300.0;
    const TOLERANCE: f64 = 1e-9;

    fn fresh_state() -> OnboardingState {
        OnboardingState::new(default_model(), PAGE_WIDTH)
    }

    #[test]
    fn test_initial_state() {
        let state = fresh_state();

        assert_eq!(state.screen, Screen::Onboarding);
        assert_eq!(state.page_index, 0);
        assert!(!state.show_explore);
        assert!(!state.is_dragging());

        // Only the first backdrop is visible at rest.
        assert!((state.layer_opacity(0) - 1.0).abs() < TOLERANCE);
        for layer in 1..5 {
            assert!(state.layer_opacity(layer).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_drag_moves_strip() {
        let mut state = fresh_state();

        state.begin_drag(200.0);
        assert!(state.is_dragging());

        // Dragging the pointer left by 60 px scrolls 60 px toward page one.
        state.update_drag(140.0);
        assert!((state.offset_x - 60.0).abs() < TOLERANCE);

        // Dragging back right past the start runs into the overdrag clamp.
        state.update_drag(500.0);
        assert!((state.offset_x + crate::motion::layout::OVERDRAG_PX).abs() < TOLERANCE);
    }

    #[test]
    fn test_drag_overdrag_clamp_at_far_end() {
        let mut state = fresh_state();
        state.jump_to_page(4);

        state.begin_drag(200.0);
        state.update_drag(-1000.0);
        let limit = state.max_offset() + crate::motion::layout::OVERDRAG_PX;
        assert!((state.offset_x - limit).abs() < TOLERANCE);
    }

    #[test]
    fn test_end_drag_snaps_to_nearest_page() {
        let mut state = fresh_state();

        state.begin_drag(300.0);
        state.update_drag(140.0);
        // 160 px is past the midpoint, so the nearest boundary is page one.
        assert_eq!(state.end_drag(), Some(PAGE_WIDTH));
        assert!(!state.is_dragging());

        // A short drag releases back to the page it started on.
        let mut state = fresh_state();
        state.begin_drag(300.0);
        state.update_drag(160.0);
        assert_eq!(state.end_drag(), Some(0.0));
    }

    #[test]
    fn test_end_drag_without_begin() {
        let mut state = fresh_state();
        assert_eq!(state.end_drag(), None);
    }

    #[test]
    fn test_settle_updates_indicator_and_explore() {
        let mut state = fresh_state();

        state.set_offset(4.0 * PAGE_WIDTH);
        state.settle();
        assert_eq!(state.page_index, 4);
        assert!(state.show_explore);

        // Settling back off the last page hides the button again.
        state.set_offset(PAGE_WIDTH);
        state.settle();
        assert_eq!(state.page_index, 1);
        assert!(!state.show_explore);
    }

    #[test]
    fn test_settle_does_not_flicker_mid_gesture() {
        let mut state = fresh_state();

        // A drag in flight changes the offset but not the settled state.
        state.begin_drag(200.0);
        state.update_drag(50.0);
        assert_eq!(state.page_index, 0);
        assert!(!state.show_explore);
    }

    #[test]
    fn test_jump_to_page_clamps() {
        let mut state = fresh_state();

        state.jump_to_page(99);
        assert_eq!(state.page_index, 4);
        assert!(state.show_explore);
        assert!((state.offset_x - state.max_offset()).abs() < TOLERANCE);
    }

    #[test]
    fn test_layer_opacity_mid_swipe() {
        let mut state = fresh_state();
        state.set_offset(150.0);

        assert!((state.layer_opacity(0) - 0.5).abs() < TOLERANCE);
        assert!((state.layer_opacity(1) - 0.5).abs() < TOLERANCE);
        for layer in 2..5 {
            assert!(state.layer_opacity(layer).abs() < TOLERANCE);
        }

        // Coverage never drops during a swipe.
        let total: f64 = (0..5).map(|layer| state.layer_opacity(layer)).sum();
        assert!((total - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_layer_opacity_on_last_page() {
        let mut state = fresh_state();
        state.jump_to_page(4);

        // The neutral path: the last layer alone is opaque, and no layer
        // beyond the catalog is ever consulted.
        assert!((state.layer_opacity(4) - 1.0).abs() < TOLERANCE);
        for layer in 0..4 {
            assert!(state.layer_opacity(layer).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_activate_explore_is_one_shot() {
        let mut state = fresh_state();

        assert!(state.activate_explore());
        assert_eq!(state.screen, Screen::Main);

        // Further activations fire nothing.
        assert!(!state.activate_explore());
        assert_eq!(state.screen, Screen::Main);
    }
}
