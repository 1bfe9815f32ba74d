//! The question, with a "No" button that keeps getting away.

use dioxus::prelude::*;
use valentine_core::{DeclineTrigger, ProposalCopy, ProposalState, Pulse, SpringTransition};

use super::{CatIcon, HeartIcon};

#[component]
pub fn QuestionScreen(
    state: ProposalState,
    copy: ProposalCopy,
    on_accept: EventHandler<()>,
    on_decline: EventHandler<DeclineTrigger>,
) -> Element {
    let encouragement = state.encouragement().map(|e| e.text(&copy).to_string());
    let decline_style = format!(
        "transform: {}; transition: {};",
        state.visible_offset().css_translate(),
        SpringTransition::default().css_transition("transform"),
    );
    let cat_sway_left = Pulse::CAT_SWAY_LEFT.css_animation();
    let heart_hop = Pulse::HEART_HOP.css_animation();
    let cat_sway_right = Pulse::CAT_SWAY_RIGHT.css_animation();
    let accept_heartbeat = Pulse::ACCEPT_HEARTBEAT.css_animation();

    rsx! {
        div {
            class: "screen screen-question",

            div {
                class: "question-mascots rise-in",
                style: "animation-delay: 0.2s",

                div {
                    style: "animation: {cat_sway_left}",
                    CatIcon { class: "cat-medium" }
                }
                div {
                    style: "animation: {heart_hop}",
                    HeartIcon { class: "heart-large" }
                }
                div {
                    style: "animation: {cat_sway_right}",
                    CatIcon { class: "cat-medium" }
                }
            }

            h1 {
                class: "question-title rise-in",
                style: "animation-delay: 0.4s",
                "{copy.question}"
            }

            if let Some(text) = encouragement {
                p {
                    key: "{state.decline_count}",
                    class: "encouragement fade-in",
                    "{text}"
                }
            }

            div {
                class: "answer-row rise-in",
                style: "animation-delay: 0.6s",

                button {
                    class: "btn btn-primary btn-accept",
                    style: "animation: {accept_heartbeat}",
                    onclick: move |_| on_accept.call(()),
                    "{copy.accept_label}"
                }

                button {
                    class: "btn btn-decline",
                    style: "{decline_style}",
                    onmouseenter: move |_| on_decline.call(DeclineTrigger::PointerEnter),
                    onclick: move |_| on_decline.call(DeclineTrigger::Activate),
                    onmouseleave: move |_| on_decline.call(DeclineTrigger::PointerLeave),
                    "{copy.decline_label}"
                }
            }
        }
    }
}
