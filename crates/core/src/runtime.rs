//! Event loop driving a [`SearchWidget`].
//!
//! One task owns the widget and multiplexes three sources: page events from a
//! [`WidgetHandle`], debounce expiries, and completed lookups. Lookups run in a
//! [`JoinSet`] so typing keeps flowing while a request is in flight; they are
//! never cancelled, and stale completions are filtered by generation. A lookup
//! task that panics is reaped and logged like any other completion.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::client::SearchClient;
use crate::error::LookupError;
use crate::page::SearchPage;
use crate::types::{ClickTarget, ResultItem, WidgetEvent};
use crate::widget::{LookupTicket, SearchWidget};

/// Receiving half of [`channel`], consumed by [`run`].
pub type EventStream = mpsc::UnboundedReceiver<WidgetEvent>;

/// Cloneable sender for page events. Each call returns whether the loop is alive.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    tx: mpsc::UnboundedSender<WidgetEvent>,
}

impl WidgetHandle {
    pub fn send(&self, event: WidgetEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn input(&self, value: impl Into<String>) -> bool {
        self.send(WidgetEvent::Input(value.into()))
    }

    pub fn select(&self, index: usize, title: impl Into<String>) -> bool {
        self.send(WidgetEvent::Select { index, title: title.into() })
    }

    pub fn submit(&self) -> bool {
        self.send(WidgetEvent::Submit)
    }

    pub fn click(&self, target: ClickTarget) -> bool {
        self.send(WidgetEvent::Click(target))
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create a handle and the event stream it feeds.
pub fn channel() -> (WidgetHandle, EventStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (WidgetHandle { tx }, rx)
}

struct Completed {
    ticket: LookupTicket,
    result: Result<Vec<ResultItem>, LookupError>,
}

/// Run the widget until every [`WidgetHandle`] is dropped.
///
/// After the last handle goes away no more events are accepted, but an armed
/// debounce timer still fires and in-flight lookups still land, so the page ends
/// in the state the user would have seen. Returns the widget for inspection.
pub async fn run<C, P>(
    mut widget: SearchWidget<P>,
    client: Arc<C>,
    mut events: EventStream,
) -> SearchWidget<P>
where
    C: SearchClient,
    P: SearchPage,
{
    let mut lookups: JoinSet<Completed> = JoinSet::new();
    let mut accepting = true;

    info!(endpoint = widget.config().endpoint.as_str(), "Search widget started");

    loop {
        if !accepting && !widget.has_pending_timer() && lookups.is_empty() {
            break;
        }

        tokio::select! {
            event = events.recv(), if accepting => match event {
                Some(event) => widget.handle_event(event),
                None => {
                    debug!("All widget handles dropped, draining");
                    accepting = false;
                }
            },
            Some(ticket) = widget.next_timer(), if widget.has_pending_timer() => {
                if let Some(ticket) = widget.on_timer(ticket) {
                    let client = Arc::clone(&client);
                    lookups.spawn(async move {
                        let result = client.lookup(&ticket.query).await;
                        Completed { ticket, result }
                    });
                }
            }
            Some(joined) = lookups.join_next(), if !lookups.is_empty() => match joined {
                Ok(done) => widget.on_lookup_complete(done.ticket, done.result),
                Err(e) => error!("Search lookup task failed: {e}"),
            },
            else => break,
        }
    }

    info!("Search widget stopped");
    widget
}
