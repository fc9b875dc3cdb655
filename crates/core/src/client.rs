//! Search endpoint client.
//!
//! The widget talks to the server through [`SearchClient`] so tests and front ends
//! can swap in their own lookup. [`HttpSearchClient`] is the real one:
//! `GET {endpoint}{search_path}?{query_param}=<percent-encoded query>`.

use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::error::LookupError;
use crate::types::{Query, ResultItem};

/// One asynchronous lookup per debounced query.
pub trait SearchClient: Send + Sync + 'static {
    fn lookup(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Vec<ResultItem>, LookupError>> + Send;
}

/// `reqwest`-backed client for the `/search` endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: Client,
    base_url: String,
    query_param: String,
}

impl HttpSearchClient {
    pub fn new(config: &WidgetConfig) -> Result<Self, LookupError> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(http, config))
    }

    /// Reuse an existing `reqwest` client (shared connection pool).
    pub fn with_client(http: Client, config: &WidgetConfig) -> Self {
        let base_url =
            format!("{}{}", config.endpoint.trim_end_matches('/'), config.search_path);
        Self { http, base_url, query_param: config.query_param.clone() }
    }

    /// Full request URL for a query.
    pub fn search_url(&self, query: &Query) -> String {
        format!(
            "{}?{}={}",
            self.base_url,
            urlencoding::encode(&self.query_param),
            urlencoding::encode(query.as_str())
        )
    }
}

impl SearchClient for HttpSearchClient {
    async fn lookup(&self, query: &Query) -> Result<Vec<ResultItem>, LookupError> {
        let url = self.search_url(query);
        debug!(%url, "Issuing search lookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        let items: Vec<ResultItem> = serde_json::from_slice(&body)?;
        debug!(query = query.as_str(), count = items.len(), "Search lookup complete");
        Ok(items)
    }
}
