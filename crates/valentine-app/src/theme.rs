//! Colour palette and the document head.
//!
//! `Theme` owns the CSS custom properties; `assets/styles.css` only refers to
//! them through `var(--name)`. Everything the window loads is embedded, so the
//! page works offline.

use dioxus::prelude::*;

/// Stylesheet embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Pink-to-lavender gradient.
    #[default]
    Blush,
}

impl Theme {
    /// Value of the `data-theme` attribute.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Blush => "blush",
        }
    }

    /// Custom properties as `(name, value)` pairs, names without the `--`.
    pub fn palette(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Blush => &[
                ("bg-from", "#fbcfe8"),
                ("bg-via", "#f9a8d4"),
                ("bg-to", "#d8b4fe"),
                ("ink", "#9d174d"),
                ("ink-soft", "#be185d"),
                ("accent", "#db2777"),
                ("accent-hover", "#be185d"),
                ("muted", "#9ca3af"),
                ("muted-hover", "#6b7280"),
                ("heart", "#ef4444"),
                ("heart-soft", "#ec4899"),
                ("sparkle", "#facc15"),
            ],
        }
    }

    /// The `[data-theme="..."]` rule declaring the palette.
    pub fn css_variables(&self) -> String {
        let mut rule = format!("[data-theme=\"{}\"] {{\n", self.css_value());
        for (name, value) in self.palette() {
            rule.push_str(&format!("  --{name}: {value};\n"));
        }
        rule.push_str("}\n");
        rule
    }
}

/// Markup injected into the window's `<head>`: palette, then stylesheet.
pub fn custom_head(theme: Theme) -> String {
    format!("<style>\n{}\n{}</style>", theme.css_variables(), STYLES_CSS)
}

/// Root element carrying the theme attribute.
#[component]
pub fn ThemedRoot(theme: Theme, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": theme.css_value(),
            {children}
        }
    }
}
