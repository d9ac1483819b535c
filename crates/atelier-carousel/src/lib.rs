//! # Atelier Carousel
//!
//! Carousel model and scroll synchronization logic for the Atelier
//! onboarding screen.
//!
//! The onboarding screen shows a horizontally paged strip of quote cards
//! over a stack of full-bleed backdrop layers. As the user drags between
//! pages, the backdrop for the current page fades out while the next one
//! fades in; when the gesture settles on a page boundary the page indicator
//! advances and the explore button appears on the final page.
//!
//! This crate holds the logic behind that behavior, with no UI
//! dependencies:
//!
//! - [`model`]: the ordered list of onboarding items and checked access
//! - [`sync`]: the offset-to-state synchronizer (crossfade pairs and
//!   settle outcomes)
//! - [`error`]: carousel error types
//!
//! The synchronizer is stateless: every output is a pure function of the
//! `(offset, page width)` sample it is handed, so the presentation layer
//! can re-derive the full visual state at any instant.

pub mod error;
pub mod model;
pub mod sync;

pub use error::CarouselError;
pub use model::{CarouselModel, OnboardingItem};
pub use sync::{FadePair, ScrollSync, SettleOutcome};
