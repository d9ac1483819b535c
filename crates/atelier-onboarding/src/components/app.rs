//! Root application component for the onboarding screen.

use dioxus::prelude::*;

use crate::state::{OnboardingState, Screen};
use crate::theme::ThemedRoot;

use super::{Backdrop, ExploreButton, PageIndicator, QuoteCarousel};

/// Root application component.
#[component]
pub fn App(state: Signal<OnboardingState>) -> Element {
    let screen = state.read().screen;

    rsx! {
        ThemedRoot {
            if screen == Screen::Main {
                MainScreen {}
            } else {
                OnboardingScreen { state }
            }
        }
    }
}

/// The onboarding carousel screen.
#[component]
fn OnboardingScreen(state: Signal<OnboardingState>) -> Element {
    rsx! {
        div {
            class: "onboarding-screen",

            // Backdrop layers, crossfaded by scroll position
            Backdrop { state }

            // The draggable quote strip
            QuoteCarousel { state }

            // Page dots and the explore button
            div {
                class: "onboarding-footer",

                PageIndicator { state }
                ExploreButton { state }
            }
        }
    }
}

/// Placeholder main screen, entered via the explore button with a
/// cross-dissolve.
#[component]
fn MainScreen() -> Element {
    rsx! {
        div {
            class: "main-screen",

            h1 {
                class: "main-screen-title",
                "Atelier"
            }
            p {
                class: "main-screen-subtitle",
                "Your wardrobe, curated."
            }
        }
    }
}
