//! Crossfading backdrop layers behind the carousel.

use dioxus::prelude::*;

use crate::state::OnboardingState;

/// One full-bleed layer per catalog item, stacked in page order. Layer
/// opacities come straight from the state's derivation; nothing here
/// remembers which layer was visible last.
#[component]
pub fn Backdrop(state: Signal<OnboardingState>) -> Element {
    let state_read = state.read();

    let layers: Vec<(String, f64)> = state_read
        .model()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let asset = item.image.as_deref().unwrap_or("plain");
            (
                format!("backdrop-layer backdrop-{asset}"),
                state_read.layer_opacity(index),
            )
        })
        .collect();

    rsx! {
        div {
            class: "backdrop",

            for (index, (layer_class, opacity)) in layers.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "{layer_class}",
                    style: "opacity: {opacity}",
                }
            }
        }
    }
}
