//! State management for the onboarding screen.

pub mod catalog;
pub mod onboarding_state;

pub use catalog::*;
pub use onboarding_state::*;
