//! Entry point for the proposal page.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use valentine_app::cli::Args;
use valentine_app::components::App;
use valentine_app::settings;
use valentine_app::theme::{self, Theme};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Only set for non-blocking file output; the desktop preset writes
    // synchronously because `launch` never returns.
    let _log_guard = valentine_logging::ValentineSubscriberBuilder::new()
        .with_config(args.log_config())
        .init();

    let config = args.resolve_config()?;
    tracing::info!(
        range = config.offset_range.extent(),
        policy = config.trigger_policy.name(),
        "Starting proposal page"
    );
    settings::install(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("💕")
                        .with_inner_size(LogicalSize::new(args.width, args.height))
                        .with_maximized(false),
                )
                .with_custom_head(theme::custom_head(Theme::Blush)),
        )
        .launch(App);

    Ok(())
}
