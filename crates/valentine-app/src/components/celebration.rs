//! Terminal screen after a yes.

use dioxus::prelude::*;
use valentine_core::{ProposalCopy, Pulse};

use super::{CatIcon, HeartIcon, SparklesIcon};

/// Hearts in the bouncing row under the title.
const HEART_ROW_LEN: usize = 5;

#[component]
pub fn CelebrationScreen(copy: ProposalCopy) -> Element {
    let row = Pulse::heart_row(HEART_ROW_LEN, 0.1);
    let cat_wiggle = Pulse::CAT_WIGGLE.css_animation();
    let title_breathe = Pulse::TITLE_BREATHE.css_animation();

    rsx! {
        div {
            class: "screen screen-celebration",

            div {
                class: "celebration-mascot",
                style: "animation: {cat_wiggle}",
                CatIcon { class: "cat-huge" }
            }

            div {
                class: "celebration-title-frame",
                style: "animation: {title_breathe}",
                h1 { class: "celebration-title", "{copy.celebration_title}" }
                SparklesIcon { class: "sparkle sparkle-top" }
                SparklesIcon { class: "sparkle sparkle-bottom" }
            }

            p {
                class: "celebration-subtitle rise-in",
                style: "animation-delay: 0.3s",
                "{copy.celebration_subtitle}"
            }

            div {
                class: "heart-row rise-in",
                style: "animation-delay: 0.5s",
                for (i, pulse) in row.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "animation: {pulse.css_animation()}",
                        HeartIcon { class: "heart-medium" }
                    }
                }
            }

            p {
                class: "sign-off fade-in",
                style: "animation-delay: 1s",
                "{copy.sign_off}"
            }
        }
    }
}
