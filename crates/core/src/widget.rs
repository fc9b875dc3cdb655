//! The search widget state machine.
//!
//! [`SearchWidget`] reacts to one event at a time and never blocks: keystrokes arm
//! the debouncer, timer expiries hand back a [`LookupTicket`] for the event loop to
//! run, and lookup completions render or hide the dropdown. Keystrokes, selections
//! and form submissions bump the generation, and tickets from older generations
//! are ignored when they come back, so a slow response can never overwrite a
//! newer one.

use tracing::{debug, error, trace};

use crate::config::WidgetConfig;
use crate::debounce::Debouncer;
use crate::error::LookupError;
use crate::page::{SearchPage, SearchPageExt};
use crate::types::{ClickTarget, Query, ResultItem, WidgetEvent, WidgetState};

/// A debounced query that is due for lookup, tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub query: Query,
}

pub struct SearchWidget<P> {
    config: WidgetConfig,
    page: P,
    debouncer: Debouncer<LookupTicket>,
    generation: u64,
    state: WidgetState,
    visible: bool,
    results: Vec<ResultItem>,
}

impl<P: SearchPage> SearchWidget<P> {
    pub fn new(mut config: WidgetConfig, page: P) -> Self {
        // An empty query is never looked up.
        config.min_query_len = config.min_query_len.max(1);
        let debouncer = Debouncer::new(config.debounce);
        Self {
            config,
            page,
            debouncer,
            generation: 0,
            state: WidgetState::Idle,
            visible: false,
            results: Vec::new(),
        }
    }

    pub fn handle_event(&mut self, event: WidgetEvent) {
        trace!(?event, "Widget event");
        match event {
            WidgetEvent::Input(raw) => self.on_input(&raw),
            WidgetEvent::Select { index, title } => self.on_select(index, &title),
            WidgetEvent::Submit => self.on_submit(),
            WidgetEvent::Click(target) => self.on_click(target),
        }
    }

    /// The text field changed. Must be called from within a tokio runtime.
    pub fn on_input(&mut self, raw: &str) {
        self.generation += 1;
        self.debouncer.cancel();

        let query = Query::from_input(raw);
        if !query.meets_minimum(self.config.min_query_len) {
            self.hide();
            self.state = WidgetState::Idle;
            return;
        }

        debug!(query = query.as_str(), generation = self.generation, "Scheduling lookup");
        self.debouncer.schedule(LookupTicket { generation: self.generation, query });
        self.state = WidgetState::Pending;
    }

    /// The debounce timer expired. Returns the lookup to issue, if still current.
    pub fn on_timer(&mut self, ticket: LookupTicket) -> Option<LookupTicket> {
        if ticket.generation != self.generation {
            debug!(query = ticket.query.as_str(), "Dropping superseded timer");
            return None;
        }
        Some(ticket)
    }

    /// A lookup finished.
    pub fn on_lookup_complete(
        &mut self,
        ticket: LookupTicket,
        result: Result<Vec<ResultItem>, LookupError>,
    ) {
        if ticket.generation != self.generation {
            debug!(
                query = ticket.query.as_str(),
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale lookup response"
            );
            return;
        }

        match result {
            Ok(items) if !items.is_empty() => {
                debug!(query = ticket.query.as_str(), count = items.len(), "Showing results");
                self.page.show_results(&items, self.config.show_author);
                self.results = items;
                self.visible = true;
                self.state = WidgetState::Showing;
            }
            Ok(_) => {
                debug!(query = ticket.query.as_str(), "No results");
                self.hide();
                self.state = WidgetState::Idle;
            }
            Err(e) => {
                error!(query = ticket.query.as_str(), "Search lookup failed: {e}");
                self.hide();
                self.state = WidgetState::Idle;
            }
        }
    }

    /// A rendered result was clicked: fill the input, close the dropdown, submit.
    ///
    /// `title` is the text of the row the user clicked. A lookup may have landed
    /// and re-rendered the dropdown since, so `index` is only used for logging.
    pub fn on_select(&mut self, index: usize, title: &str) {
        if !self.visible || title.is_empty() {
            debug!(index, "Ignoring selection while no results are shown");
            return;
        }
        if self.results.get(index).map(|item| item.title.as_str()) != Some(title) {
            debug!(index, title, "Selected row was re-rendered before the click was handled");
        }

        self.generation += 1;
        self.debouncer.cancel();
        self.page.set_input_value(title);
        self.hide();
        self.state = WidgetState::Idle;
        debug!(title, "Submitting selected result");
        self.page.submit_form();
    }

    /// The form was submitted with whatever is in the text field.
    pub fn on_submit(&mut self) {
        self.generation += 1;
        self.debouncer.cancel();
        self.hide();
        self.state = WidgetState::Idle;
        debug!("Submitting typed query");
        self.page.submit_form();
    }

    /// A click anywhere on the page. Clicks outside the widget close the dropdown.
    pub fn on_click(&mut self, target: ClickTarget) {
        if !target.is_outside() {
            return;
        }
        self.hide();
        if self.state == WidgetState::Showing {
            self.state = WidgetState::Idle;
        }
    }

    fn hide(&mut self) {
        self.page.hide_results();
        self.results.clear();
        self.visible = false;
    }

    /// Wait for the debounce timer. Only meaningful while [`Self::has_pending_timer`].
    pub async fn next_timer(&mut self) -> Option<LookupTicket> {
        self.debouncer.fired().await
    }

    pub fn has_pending_timer(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl<P> SearchWidget<P> {
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records currently rendered in the dropdown.
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }
}
