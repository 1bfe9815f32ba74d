//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn HeartIcon(#[props(default)] class: String, #[props(default)] style: String) -> Element {
    rsx! {
        svg {
            class: "icon icon-heart {class}",
            style: "{style}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path {
                d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            }
        }
    }
}

#[component]
pub fn CatIcon(#[props(default)] class: String, #[props(default)] style: String) -> Element {
    rsx! {
        svg {
            class: "icon icon-cat {class}",
            style: "{style}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path {
                d: "M12 5c.67 0 1.35.09 2 .26 1.78-2 5.03-2.84 6.42-2.26 1.4.58-.42 7-.42 7 .57 1.07 1 2.24 1 3.44C21 17.9 16.97 21 12 21s-9-3-9-7.56c0-1.25.5-2.4 1-3.44 0 0-1.89-6.42-.5-7 1.39-.58 4.72.23 6.5 2.23A9.04 9.04 0 0 1 12 5Z",
            }
            path { d: "M8 14v.5" }
            path { d: "M16 14v.5" }
            path { d: "M11.25 16.25h1.5L12 17l-.75-.75Z" }
        }
    }
}

#[component]
pub fn SparklesIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon icon-sparkles {class}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path {
                d: "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
            }
        }
    }
}
