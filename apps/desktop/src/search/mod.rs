//! Search form — text input plus the results dropdown.

mod search_input;
mod search_results;

use dioxus::prelude::*;
use search_input::SearchInput;
use search_results::SearchResults;
use typeahead_core::{ClickTarget, WidgetHandle};

/// The search form. Clicks inside it never reach the app shell.
#[component]
pub fn SearchPanel() -> Element {
    let handle = use_context::<WidgetHandle>();
    let submit_handle = handle.clone();

    rsx! {
        form {
            class: "search-form",
            onclick: move |e: Event<MouseData>| {
                e.stop_propagation();
                handle.click(ClickTarget::Form);
            },
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                submit_handle.submit();
            },

            span { class: "search-label", "FIND A BOOK" }
            SearchInput {}
            SearchResults {}
        }
    }
}
