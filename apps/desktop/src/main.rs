//! Typeahead Desktop — Dioxus front end for the search widget.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;
use typeahead_core::WidgetConfig;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<WidgetConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typeahead=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let mut config = typeahead_core::load_typeahead_config(&cwd);
    if let Ok(endpoint) = std::env::var("TYPEAHEAD_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Book Search")
                            .with_inner_size(LogicalSize::new(900.0, 640.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 360.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
