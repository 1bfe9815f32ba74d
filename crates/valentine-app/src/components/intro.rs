//! Greeting screen.

use dioxus::prelude::*;
use valentine_core::{ProposalCopy, Pulse};

use super::{CatIcon, HeartIcon};

#[component]
pub fn IntroScreen(copy: ProposalCopy, on_advance: EventHandler<()>) -> Element {
    let cat_bob = Pulse::CAT_BOB.css_animation();
    let heart_beat = Pulse::HEART_BEAT.css_animation();
    let heart_beat_late = Pulse::HEART_BEAT_LATE.css_animation();

    rsx! {
        div {
            class: "screen screen-intro",

            div {
                class: "intro-mascot",
                style: "animation: {cat_bob}",

                div {
                    class: "mascot-frame",
                    CatIcon { class: "cat-large" }
                    HeartIcon {
                        class: "perched-heart perched-heart-right",
                        style: "animation: {heart_beat}",
                    }
                    HeartIcon {
                        class: "perched-heart perched-heart-left",
                        style: "animation: {heart_beat_late}",
                    }
                }
            }

            h1 {
                class: "intro-title rise-in",
                style: "animation-delay: 0.3s",
                "{copy.greeting}"
            }
            p {
                class: "intro-teaser rise-in",
                style: "animation-delay: 0.5s",
                "{copy.teaser}"
            }
            button {
                class: "btn btn-primary btn-start rise-in",
                style: "animation-delay: 0.7s",
                onclick: move |_| on_advance.call(()),
                "{copy.start_label}"
            }
        }
    }
}
