//! The explore call-to-action.

use dioxus::prelude::*;

use crate::state::OnboardingState;

/// The explore button, rendered only while the carousel rests on the last
/// page. Activating it performs the one-shot transition into the main
/// screen.
#[component]
pub fn ExploreButton(state: Signal<OnboardingState>) -> Element {
    let mut state_write = state;
    let visible = state.read().show_explore;

    rsx! {
        if visible {
            button {
                class: "explore-button",
                onclick: move |_| {
                    if state_write.write().activate_explore() {
                        tracing::info!("Explore activated, leaving onboarding");
                    }
                },
                "Explore"
            }
        }
    }
}
