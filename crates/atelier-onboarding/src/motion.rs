//! Snap motion control for the carousel.
//!
//! Uses atomic primitives for lock-free communication between the UI
//! event handlers and the async tween driver: releasing a drag requests a
//! snap toward a page boundary, and the driver animates the strip there
//! before settling the discrete state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Tween timing for the page snap.
pub mod snap {
    /// Duration of the snap tween from release to rest (ms).
    pub const DURATION_MS: u64 = 240;
    /// Interval between tween frames (ms).
    pub const TICK_MS: u64 = 16;
    /// Poll interval of the driver while no snap is pending (ms).
    pub const IDLE_POLL_MS: u64 = 30;
}

/// Layout constants for the carousel view.
pub mod layout {
    /// Logical width of one page, equal to the window width.
    pub const PAGE_WIDTH: f64 = 390.0;
    /// How far the strip may be dragged past either end before the
    /// offset clamp stops it.
    pub const OVERDRAG_PX: f64 = 60.0;
}

/// Whether a snap has been requested.
static SNAP_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Target offset of the requested snap, stored as f64 bits.
static SNAP_TARGET_BITS: AtomicU64 = AtomicU64::new(0);

/// Whether shutdown has been requested.
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Requests a snap of the strip to `target_x`.
///
/// A newer request overwrites a pending one; only the latest target is
/// ever animated.
pub fn request_snap(target_x: f64) {
    SNAP_TARGET_BITS.store(target_x.to_bits(), Ordering::Relaxed);
    SNAP_REQUESTED.store(true, Ordering::Relaxed);
}

/// Takes and clears the pending snap request, if any.
pub fn take_snap_request() -> Option<f64> {
    if SNAP_REQUESTED.swap(false, Ordering::Relaxed) {
        Some(f64::from_bits(SNAP_TARGET_BITS.load(Ordering::Relaxed)))
    } else {
        None
    }
}

/// Requests shutdown of the motion driver.
pub fn request_shutdown() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Relaxed);
}

/// Returns whether shutdown has been requested.
pub fn is_shutdown_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::Relaxed)
}

/// Ease-out cubic: fast start, soft landing on the page boundary.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_request_round_trip() {
        // Single test for the request/take pair; the statics are shared
        // across the test process.
        assert_eq!(take_snap_request(), None);

        request_snap(1170.0);
        assert_eq!(take_snap_request(), Some(1170.0));
        assert_eq!(take_snap_request(), None);

        // Fractional targets survive the bit store exactly, and a newer
        // request overwrites a pending one.
        request_snap(123.456);
        request_snap(-60.0);
        assert_eq!(take_snap_request(), Some(-60.0));
        assert_eq!(take_snap_request(), None);
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_monotonicity() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);

        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = ease_out_cubic(step as f64 / 100.0);
            assert!(eased >= previous);
            assert!((0.0..=1.0).contains(&eased));
            previous = eased;
        }
    }
}
