//! Simulated typing session: keystrokes replayed through the real widget loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;
use tracing::warn;
use typeahead_core::{channel, run, SearchClient, SearchWidget, WidgetConfig};

use crate::page::TerminalPage;

/// What to type, how fast, and which result to click afterwards.
#[derive(Debug, Clone)]
pub struct Keystrokes {
    pub text: String,
    pub interval: Duration,
    pub select: Option<usize>,
    /// Extra wait after the debounce delay before clicking, so lookups can land.
    pub settle: Duration,
}

/// Type `keys.text` one character at a time, optionally click a result, then wait
/// for the widget to drain. Returns the page as the user would see it.
pub async fn type_into_widget<C: SearchClient>(
    config: WidgetConfig,
    client: Arc<C>,
    page: TerminalPage,
    keys: &Keystrokes,
) -> Result<TerminalPage, JoinError> {
    let debounce = config.debounce;
    let widget = SearchWidget::new(config, page.clone());
    let (handle, events) = channel();
    let task = tokio::spawn(run(widget, client, events));

    let mut typed = String::new();
    for ch in keys.text.chars() {
        typed.push(ch);
        page.type_value(&typed);
        handle.input(typed.clone());
        tokio::time::sleep(keys.interval).await;
    }

    if let Some(index) = keys.select {
        tokio::time::sleep(debounce + keys.settle).await;
        match page.rendered_title(index) {
            Some(title) => {
                page.note(&format!("> click result {index} ({title})"));
                handle.select(index, title);
            }
            None => warn!(index, "No result shown at that position, nothing to click"),
        }
    }
    drop(handle);

    task.await?;
    Ok(page)
}
