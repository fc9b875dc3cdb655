//! Results dropdown — one clickable row per record.

use dioxus::prelude::*;
use typeahead_core::{ClickTarget, WidgetHandle};

use crate::state::*;

#[component]
pub fn SearchResults() -> Element {
    let handle = use_context::<WidgetHandle>();
    let container_handle = handle.clone();
    let results = RESULTS.read();
    let visible = *RESULTS_VISIBLE.read();

    rsx! {
        div {
            class: if visible { "search-results visible" } else { "search-results" },
            onclick: move |e: Event<MouseData>| {
                e.stop_propagation();
                container_handle.click(ClickTarget::Results);
            },
            for (i, result) in results.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "search-result-item",
                    onclick: {
                        let handle = handle.clone();
                        let title = result.title.clone();
                        move |e: Event<MouseData>| {
                            e.stop_propagation();
                            handle.select(i, title.clone());
                        }
                    },
                    span { class: "search-result-title", {result.title.as_str()} }
                    {result.author.as_deref().map(|author| rsx! {
                        span { class: "search-result-author", "{author}" }
                    })}
                }
            }
        }
    }
}
