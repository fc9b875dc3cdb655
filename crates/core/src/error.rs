use thiserror::Error;

/// Why a lookup produced no results.
///
/// None of these are fatal: the widget logs them and hides the dropdown.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The endpoint answered with a non-2xx status.
    #[error("search endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The request never produced a response (connect, TLS, body read).
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a JSON array of result records.
    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
