//! Search input — every keystroke goes to the widget, which debounces it.

use dioxus::prelude::*;
use typeahead_core::{ClickTarget, WidgetHandle};

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let handle = use_context::<WidgetHandle>();
    let click_handle = handle.clone();
    let query = QUERY.read();

    rsx! {
        div {
            class: "search-input-row",

            // Search icon
            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "text",
                name: "book_name",
                placeholder: "Search by title...",
                autocomplete: "off",
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| {
                    let value = e.value();
                    *QUERY.write() = value.clone();
                    handle.input(value);
                },
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                    click_handle.click(ClickTarget::Input);
                },
            }
        }
    }
}
