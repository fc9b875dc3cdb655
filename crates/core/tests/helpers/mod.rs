//! Test harness for widget integration tests.
//!
//! Runs the real event loop against a [`RecordingPage`] that logs every mutation,
//! with either a scripted [`FakeClient`] or the HTTP client pointed at the stub
//! server in [`fixtures`].

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use typeahead_core::{
    channel, run, LookupError, Query, ResultItem, SearchClient, SearchPage, SearchWidget,
    WidgetConfig, WidgetHandle,
};

// ---------------------------------------------------------------------------
// Recording page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOp {
    SetInput(String),
    Clear,
    Append { index: usize, title: String, author: Option<String> },
    Visible(bool),
    Submit(String),
}

#[derive(Debug, Clone, Default)]
pub struct PageLog {
    pub ops: Vec<PageOp>,
    pub input: String,
    pub items: Vec<(String, Option<String>)>,
    pub visible: bool,
    pub submissions: Vec<String>,
}

impl PageLog {
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|(t, _)| t.as_str()).collect()
    }
}

/// Page whose state is shared with the test so it can be inspected while the
/// event loop owns it.
#[derive(Debug, Clone, Default)]
pub struct RecordingPage(Arc<Mutex<PageLog>>);

impl RecordingPage {
    pub fn snapshot(&self) -> PageLog {
        self.0.lock().unwrap().clone()
    }

    fn with<R>(&self, f: impl FnOnce(&mut PageLog) -> R) -> R {
        f(&mut self.0.lock().unwrap())
    }
}

impl SearchPage for RecordingPage {
    fn set_input_value(&mut self, value: &str) {
        self.with(|log| {
            log.input = value.to_string();
            log.ops.push(PageOp::SetInput(value.to_string()));
        });
    }

    fn clear_results(&mut self) {
        self.with(|log| {
            log.items.clear();
            log.ops.push(PageOp::Clear);
        });
    }

    fn append_result(&mut self, index: usize, title: &str, author: Option<&str>) {
        self.with(|log| {
            log.items.push((title.to_string(), author.map(str::to_string)));
            log.ops.push(PageOp::Append {
                index,
                title: title.to_string(),
                author: author.map(str::to_string),
            });
        });
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.with(|log| {
            log.visible = visible;
            log.ops.push(PageOp::Visible(visible));
        });
    }

    fn submit_form(&mut self) {
        self.with(|log| {
            let value = log.input.clone();
            log.submissions.push(value.clone());
            log.ops.push(PageOp::Submit(value));
        });
    }
}

// ---------------------------------------------------------------------------
// Scripted lookup client
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Outcome {
    Items(Vec<ResultItem>),
    Status(u16),
    Panic,
}

#[derive(Clone)]
struct Script {
    delay: Duration,
    outcome: Outcome,
}

#[derive(Default)]
struct FakeState {
    scripts: HashMap<String, Script>,
    calls: Vec<String>,
}

/// Lookup client answering from a script. Unscripted queries return no results.
#[derive(Clone, Default)]
pub struct FakeClient(Arc<Mutex<FakeState>>);

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, query: &str, items: Vec<ResultItem>) -> Self {
        self.respond_after(query, Duration::ZERO, items)
    }

    pub fn respond_after(self, query: &str, delay: Duration, items: Vec<ResultItem>) -> Self {
        self.script(query, Script { delay, outcome: Outcome::Items(items) })
    }

    pub fn fail(self, query: &str, status: u16) -> Self {
        self.script(query, Script { delay: Duration::ZERO, outcome: Outcome::Status(status) })
    }

    /// The lookup task for `query` panics instead of returning.
    pub fn panic_on(self, query: &str) -> Self {
        self.script(query, Script { delay: Duration::ZERO, outcome: Outcome::Panic })
    }

    fn script(self, query: &str, script: Script) -> Self {
        self.0.lock().unwrap().scripts.insert(query.to_string(), script);
        self
    }

    /// Queries looked up so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().calls.clone()
    }
}

impl SearchClient for FakeClient {
    async fn lookup(&self, query: &Query) -> Result<Vec<ResultItem>, LookupError> {
        let script = {
            let mut state = self.0.lock().unwrap();
            state.calls.push(query.as_str().to_string());
            state.scripts.get(query.as_str()).cloned()
        };
        let Some(script) = script else {
            return Ok(Vec::new());
        };
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        match script.outcome {
            Outcome::Items(items) => Ok(items),
            Outcome::Status(status) => Err(LookupError::Status { status }),
            Outcome::Panic => panic!("scripted lookup failure for {query}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct TestHarness {
    pub handle: WidgetHandle,
    pub page: RecordingPage,
    task: JoinHandle<SearchWidget<RecordingPage>>,
}

impl TestHarness {
    /// Spawn the event loop with default configuration.
    pub fn start<C: SearchClient>(client: C) -> Self {
        Self::with_config(WidgetConfig::default(), client)
    }

    pub fn with_config<C: SearchClient>(config: WidgetConfig, client: C) -> Self {
        let page = RecordingPage::default();
        let widget = SearchWidget::new(config, page.clone());
        let (handle, events) = channel();
        let task = tokio::spawn(run(widget, Arc::new(client), events));
        TestHarness { handle, page, task }
    }

    /// Drop the handle and wait for the loop to drain pending work.
    pub async fn finish(self) -> SearchWidget<RecordingPage> {
        drop(self.handle);
        self.task.await.expect("widget loop panicked")
    }
}

pub fn dune_results() -> Vec<ResultItem> {
    vec![ResultItem::new("Dune").with_author("Frank Herbert")]
}
