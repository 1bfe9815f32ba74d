//! Hearts drifting up the background.

use dioxus::prelude::*;
use valentine_core::FloatingHeart;

use super::HeartIcon;

/// Background layer of endlessly rising hearts. Layout is fixed by the caller.
#[component]
pub fn FloatingHearts(hearts: Vec<FloatingHeart>) -> Element {
    rsx! {
        div {
            class: "floating-hearts",
            "aria-hidden": "true",

            for (i, heart) in hearts.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-heart",
                    style: "{heart.style()}",
                    HeartIcon {}
                }
            }
        }
    }
}
