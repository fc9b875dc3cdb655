//! Widget configuration, loaded from `.typeahead.toml` or defaults.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

/// Name of the per-project config file.
pub const CONFIG_FILE_NAME: &str = ".typeahead.toml";

/// Known keys in `.typeahead.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["endpoint", "search_path", "query_param", "debounce_ms", "min_query_len", "show_author"];

/// Runtime configuration for the widget and its lookup client.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Scheme, host, and port of the server hosting the search endpoint.
    pub endpoint: String,
    /// Path of the search endpoint on that server.
    pub search_path: String,
    /// Name of the query-string parameter carrying the query.
    pub query_param: String,
    /// Quiet period after the last keystroke before a lookup is issued.
    pub debounce: Duration,
    /// Minimum trimmed query length, in characters. Never below 1.
    pub min_query_len: usize,
    /// Render the author line under each title when the record has one.
    pub show_author: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            search_path: "/search".to_string(),
            query_param: "query".to_string(),
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            show_author: true,
        }
    }
}

impl WidgetConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Levenshtein distance over characters, keeping a single DP row.
fn typo_distance(typed: &str, known: &str) -> usize {
    let known: Vec<char> = known.chars().collect();
    let mut row: Vec<usize> = (0..=known.len()).collect();
    for (i, t) in typed.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &k) in known.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if t == k { diag } else { 1 + diag.min(above).min(row[j]) };
            diag = above;
        }
    }
    row[known.len()]
}

/// Closest known key, if it is within a plausible typo distance.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|known| (typo_distance(key, known), *known))
        .min()
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, known)| known)
}

/// Load configuration from `.typeahead.toml` in the given directory.
///
/// Returns defaults merged with any overrides from the file. A missing file is not
/// an error; an unreadable or unparsable one logs a warning and yields defaults.
pub fn load_typeahead_config(dir: &Path) -> WidgetConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return WidgetConfig::default();
    }
    load_typeahead_config_file(&path)
}

/// Load configuration from an explicit file path.
pub fn load_typeahead_config_file(path: &Path) -> WidgetConfig {
    let mut config = WidgetConfig::default();

    debug!(path = %path.display(), "Loading typeahead config");
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), "Could not read config: {e}");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), "Failed to parse config: {e}");
            return config;
        }
    };

    // Validate keys — warn on unknown
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(endpoint) = table.get("endpoint").and_then(|v| v.as_str()) {
        config.endpoint = endpoint.to_string();
    }

    if let Some(search_path) = table.get("search_path").and_then(|v| v.as_str()) {
        config.search_path = if search_path.starts_with('/') {
            search_path.to_string()
        } else {
            format!("/{search_path}")
        };
    }

    if let Some(param) = table.get("query_param").and_then(|v| v.as_str()) {
        if param.is_empty() {
            warn!("Ignoring empty query_param");
        } else {
            config.query_param = param.to_string();
        }
    }

    match table.get("debounce_ms").map(|v| v.as_integer()) {
        Some(Some(ms)) if ms >= 0 => config.debounce = Duration::from_millis(ms as u64),
        Some(_) => warn!("debounce_ms must be a non-negative integer, keeping default"),
        None => {}
    }

    match table.get("min_query_len").map(|v| v.as_integer()) {
        Some(Some(0)) => {
            warn!("min_query_len = 0 would look up an empty query, using 1");
            config.min_query_len = 1;
        }
        Some(Some(n)) if n > 0 => config.min_query_len = n as usize,
        Some(_) => warn!("min_query_len must be a non-negative integer, keeping default"),
        None => {}
    }

    if let Some(show) = table.get("show_author").and_then(|v| v.as_bool()) {
        config.show_author = show;
    }

    config
}
