//! Core types shared across the widget: the trimmed query, result records returned
//! by the search endpoint, click classification, and the events a front end feeds
//! into the event loop.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A trimmed search query, recomputed from the raw input on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Build a query from the raw value of the text field.
    pub fn from_input(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the query is long enough to be worth a lookup.
    pub fn meets_minimum(&self, min_len: usize) -> bool {
        self.len() >= min_len
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// One match returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ResultItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), author: None }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Author line to render, if the page shows authors and the record has one.
    pub fn display_author(&self, show_author: bool) -> Option<&str> {
        if show_author {
            self.author.as_deref().filter(|a| !a.is_empty())
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Events and state
// ---------------------------------------------------------------------------

/// Where on the page a click landed, as classified by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Form,
    Input,
    Results,
    Outside,
}

impl ClickTarget {
    /// Clicks on the form, the input, or the dropdown keep results open.
    pub fn is_outside(self) -> bool {
        matches!(self, ClickTarget::Outside)
    }
}

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The text field's value changed.
    Input(String),
    /// A rendered result was clicked. Carries the title the user saw, since the
    /// dropdown may be re-rendered before the event is handled.
    Select { index: usize, title: String },
    /// The form was submitted directly (Enter in the text field).
    Submit,
    /// A click somewhere on the page.
    Click(ClickTarget),
}

/// Observable phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Results hidden, nothing scheduled.
    #[default]
    Idle,
    /// Timer armed or lookup in flight. Earlier results may still be visible.
    Pending,
    /// Results visible.
    Showing,
}
