//! Page indicator dots.

use dioxus::prelude::*;

use crate::state::OnboardingState;

/// One dot per page, with the settled page highlighted. Tracks
/// `page_index`, so it only moves once a gesture settles.
#[component]
pub fn PageIndicator(state: Signal<OnboardingState>) -> Element {
    let state_read = state.read();
    let active = state_read.page_index;
    let count = state_read.model().count();

    rsx! {
        div {
            class: "page-indicator",

            for index in 0..count {
                span {
                    key: "{index}",
                    class: if index == active { "page-dot page-dot-active" } else { "page-dot" },
                }
            }
        }
    }
}
