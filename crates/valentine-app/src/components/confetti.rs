//! One-shot confetti burst.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};
use valentine_core::ConfettiBurst;

/// Extra time after the last piece lands before the layer unmounts.
const UNMOUNT_GRACE_MS: u64 = 500;

/// Drops every piece of `burst` once, then removes itself.
#[component]
pub fn ConfettiLayer(burst: ConfettiBurst) -> Element {
    let mut landed = use_signal(|| false);
    let lifetime_ms = (burst.duration_s() * 1000.0) as u64 + UNMOUNT_GRACE_MS;

    use_hook(move || {
        spawn(async move {
            sleep(Duration::from_millis(lifetime_ms)).await;
            tracing::debug!(lifetime_ms, "confetti burst finished");
            landed.set(true);
        });
    });

    if landed() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "confetti-layer",
            "aria-hidden": "true",

            for (i, piece) in burst.pieces.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: "{piece.style()}",
                }
            }
        }
    }
}
