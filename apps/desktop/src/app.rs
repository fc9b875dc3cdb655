//! Root application component — search form on top, selection panel below.

use std::sync::Arc;

use dioxus::prelude::*;
use tracing::error;
use typeahead_core::{channel, run, ClickTarget, HttpSearchClient, SearchWidget, WidgetHandle};

use crate::search::SearchPanel;
use crate::state::*;
use crate::INITIAL_CONFIG;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

/// Build the widget against the signal-backed page and start its event loop on
/// the Dioxus executor. The returned handle is shared through context.
fn start_widget() -> WidgetHandle {
    let config = INITIAL_CONFIG.lock().ok().and_then(|mut slot| slot.take()).unwrap_or_default();
    let (handle, events) = channel();

    match HttpSearchClient::new(&config) {
        Ok(client) => {
            let widget = SearchWidget::new(config, SignalPage);
            spawn(async move {
                run(widget, Arc::new(client), events).await;
            });
        }
        Err(e) => error!("Could not create search client, suggestions disabled: {e}"),
    }

    handle
}

#[component]
pub fn App() -> Element {
    let handle = use_hook(start_widget);
    use_context_provider(|| handle.clone());

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            // Anything that reaches the shell was not inside the search form.
            onclick: move |_| {
                handle.click(ClickTarget::Outside);
            },

            header {
                class: "titlebar",
                span { class: "titlebar-title", "Book Search" }
            }

            main {
                class: "content-area",
                SearchPanel {}
                SelectionPanel {}
            }
        }
    }
}

/// Shows the book the search form was last submitted with.
#[component]
fn SelectionPanel() -> Element {
    let submitted = SUBMITTED.read();

    match submitted.as_ref() {
        Some(book) => rsx! {
            section {
                class: "selection-panel",
                h2 { "Recommendations for" }
                p { class: "selection-title", "{book}" }
            }
        },
        None => rsx! {
            section {
                class: "selection-panel selection-empty",
                span { "Start typing a book title..." }
            }
        },
    }
}
