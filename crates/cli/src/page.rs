//! Terminal rendering of the search page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::json;
use typeahead_core::SearchPage;

#[derive(Debug, Default)]
struct PageState {
    input: String,
    items: Vec<(String, Option<String>)>,
    visible: bool,
    submitted: Vec<String>,
}

/// Keeps the page state in memory and, when `echo` is set, prints every mutation
/// as it happens so a typing session can be followed on stdout.
///
/// Clones share state: the widget loop owns one copy while the typing session
/// writes keystrokes into the text field through another.
#[derive(Debug, Clone, Default)]
pub struct TerminalPage {
    echo: bool,
    state: Arc<Mutex<PageState>>,
}

impl TerminalPage {
    pub fn new(echo: bool) -> Self {
        Self { echo, ..Self::default() }
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log(&self, line: impl AsRef<str>) {
        if self.echo {
            println!("    {}", line.as_ref());
        }
    }

    /// Print a session line (a keystroke or a click) above the page mutations.
    pub fn note(&self, line: &str) {
        if self.echo {
            println!("{line}");
        }
    }

    /// The user typed into the text field.
    pub fn type_value(&self, value: &str) {
        self.note(&format!("> {value}"));
        self.state().input = value.to_string();
    }

    /// Title of the result rendered at `index`, if the dropdown is showing one.
    pub fn rendered_title(&self, index: usize) -> Option<String> {
        let state = self.state();
        if !state.visible {
            return None;
        }
        state.items.get(index).map(|(title, _)| title.clone())
    }

    /// Human-readable summary of the final page state.
    pub fn render(&self) -> String {
        let state = self.state();
        let mut out = format!("input:   {:?}\n", state.input);
        if state.visible && !state.items.is_empty() {
            out.push_str(&format!("results: {} shown\n", state.items.len()));
            for (i, (title, author)) in state.items.iter().enumerate() {
                match author {
                    Some(a) => out.push_str(&format!("  {i:>2}. {title}  ({a})\n")),
                    None => out.push_str(&format!("  {i:>2}. {title}\n")),
                }
            }
        } else {
            out.push_str("results: hidden\n");
        }
        for value in &state.submitted {
            out.push_str(&format!("submitted: {value:?}\n"));
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Value {
        let state = self.state();
        let items: Vec<_> = state
            .items
            .iter()
            .map(|(title, author)| json!({ "title": title, "author": author }))
            .collect();
        json!({
            "input": state.input,
            "visible": state.visible,
            "results": items,
            "submitted": state.submitted,
        })
    }
}

impl SearchPage for TerminalPage {
    fn set_input_value(&mut self, value: &str) {
        self.state().input = value.to_string();
        self.log(format!("[input] = {value:?}"));
    }

    fn clear_results(&mut self) {
        let mut state = self.state();
        if !state.items.is_empty() {
            self.log("[results] cleared");
        }
        state.items.clear();
    }

    fn append_result(&mut self, index: usize, title: &str, author: Option<&str>) {
        match author {
            Some(a) => self.log(format!("[results] + {index}: {title} ({a})")),
            None => self.log(format!("[results] + {index}: {title}")),
        }
        self.state().items.push((title.to_string(), author.map(str::to_string)));
    }

    fn set_results_visible(&mut self, visible: bool) {
        let mut state = self.state();
        if visible != state.visible {
            self.log(if visible { "[results] shown" } else { "[results] hidden" });
        }
        state.visible = visible;
    }

    fn submit_form(&mut self) {
        let mut state = self.state();
        let value = state.input.clone();
        self.log(format!("[form] submitted {value:?}"));
        state.submitted.push(value);
    }
}
