//! Onboarding screen for the Atelier fashion app.
//!
//! This crate is a Dioxus desktop application that renders a draggable
//! carousel of designer quotes over crossfading backdrop layers, with a
//! page indicator and an explore button that appears on the final page.
//! The scroll-to-state logic lives in `atelier-carousel`; this crate is
//! the presentation surface that feeds it offset samples and applies the
//! values it returns.

pub mod components;
pub mod motion;
pub mod state;
pub mod theme;
