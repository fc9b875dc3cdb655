//! Global page state using Dioxus signals, and the [`SearchPage`] that writes it.

use dioxus::prelude::*;
use tracing::info;
use typeahead_core::SearchPage;

/// One entry in the dropdown.
#[derive(Clone, PartialEq)]
pub struct RenderedResult {
    pub title: String,
    pub author: Option<String>,
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Value of the search input
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Items currently in the results container
pub static RESULTS: GlobalSignal<Vec<RenderedResult>> = Signal::global(Vec::new);

/// Whether the results container is displayed
pub static RESULTS_VISIBLE: GlobalSignal<bool> = Signal::global(|| false);

/// Last value the search form was submitted with
pub static SUBMITTED: GlobalSignal<Option<String>> = Signal::global(|| None);

// ---------------------------------------------------------------------------
// Page handle
// ---------------------------------------------------------------------------

/// Routes widget mutations into the global signals above.
pub struct SignalPage;

impl SearchPage for SignalPage {
    fn set_input_value(&mut self, value: &str) {
        *QUERY.write() = value.to_string();
    }

    fn clear_results(&mut self) {
        RESULTS.write().clear();
    }

    fn append_result(&mut self, _index: usize, title: &str, author: Option<&str>) {
        RESULTS.write().push(RenderedResult {
            title: title.to_string(),
            author: author.map(str::to_string),
        });
    }

    fn set_results_visible(&mut self, visible: bool) {
        *RESULTS_VISIBLE.write() = visible;
    }

    fn submit_form(&mut self) {
        submit_search_form();
    }
}

/// Submit the search form with the input's current value.
fn submit_search_form() {
    let value = QUERY.read().trim().to_string();
    if value.is_empty() {
        return;
    }
    info!(book = value.as_str(), "Search form submitted");
    *SUBMITTED.write() = Some(value);
}
