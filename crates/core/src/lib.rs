//! Typeahead — debounced search-as-you-type widget.
//!
//! This crate holds everything that does not depend on a particular renderer: the
//! data model, the debounce timer, the HTTP lookup client, and the event loop that
//! ties keystrokes, timer expiries, and lookup responses together. Front ends
//! implement [`page::SearchPage`] and feed events through a [`runtime::WidgetHandle`].
//!
//! # Modules
//!
//! - [`types`] — Queries, result records, click targets, widget state
//! - [`config`] — `.typeahead.toml` loading with typo suggestions
//! - [`debounce`] — Cancellable single-slot timer
//! - [`client`] — Lookup trait and the `reqwest`-backed HTTP client
//! - [`page`] — Handles to the form, input, and results container
//! - [`widget`] — The search widget state machine
//! - [`runtime`] — Event loop and the handle used to drive it
//! - [`error`] — Lookup error type

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod page;
pub mod runtime;
pub mod types;
pub mod widget;

pub use client::{HttpSearchClient, SearchClient};
pub use config::{load_typeahead_config, load_typeahead_config_file, WidgetConfig};
pub use error::LookupError;
pub use page::SearchPage;
pub use runtime::{channel, run, WidgetHandle};
pub use types::{ClickTarget, Query, ResultItem, WidgetEvent, WidgetState};
pub use widget::SearchWidget;
