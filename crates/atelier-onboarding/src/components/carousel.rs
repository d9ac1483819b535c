//! The draggable quote card strip.

use dioxus::prelude::*;

use atelier_carousel::OnboardingItem;

use crate::motion;
use crate::state::OnboardingState;

/// The paged carousel strip. Pointer drags feed the continuous offset into
/// the state; releasing requests a snap to the nearest page boundary,
/// which the motion driver animates before settling.
#[component]
pub fn QuoteCarousel(state: Signal<OnboardingState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();

    let dragging = state_read.is_dragging();
    let translate = -state_read.offset_x;
    let items: Vec<OnboardingItem> = state_read.model().iter().cloned().collect();
    drop(state_read);

    rsx! {
        div {
            class: if dragging { "carousel-viewport carousel-viewport-dragging" } else { "carousel-viewport" },

            onmousedown: move |evt| {
                state_write.write().begin_drag(evt.client_coordinates().x);
            },
            onmousemove: move |evt| {
                if state_write.read().is_dragging() {
                    state_write.write().update_drag(evt.client_coordinates().x);
                }
            },
            onmouseup: move |_| {
                if let Some(target) = state_write.write().end_drag() {
                    motion::request_snap(target);
                }
            },
            // Leaving the window mid-drag releases the gesture too.
            onmouseleave: move |_| {
                if let Some(target) = state_write.write().end_drag() {
                    motion::request_snap(target);
                }
            },

            div {
                class: "carousel-track",
                style: "transform: translateX({translate}px)",

                for (index, item) in items.into_iter().enumerate() {
                    QuoteCard {
                        key: "{index}",
                        item,
                    }
                }
            }
        }
    }
}

/// A single quote card: attribution above the quote.
#[component]
fn QuoteCard(item: OnboardingItem) -> Element {
    rsx! {
        article {
            class: "quote-card",

            h2 {
                class: "quote-card-title",
                "{item.title}"
            }
            p {
                class: "quote-card-detail",
                "{item.detail}"
            }
        }
    }
}
