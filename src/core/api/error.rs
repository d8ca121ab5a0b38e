use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a call against the remote geolocation API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An authenticated call was attempted without a session token.
    /// No request was sent.
    #[error("No session token found")]
    MissingToken,

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a usable response (connect, timeout, body decode).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server rejected request with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// The text shown to the user when a lookup fails: the server's message
    /// followed by the HTTP reason phrase, e.g. `"Not found. Not Found"`.
    ///
    /// The reason is the canonical phrase for the status code, not whatever
    /// text the server put on its status line. HTTP/2 responses carry no
    /// reason phrase at all, so this keeps the message stable across both.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Rejected { status, message } => {
                let reason = status.canonical_reason().unwrap_or_default();
                match message.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
                    Some(message) if reason.is_empty() => message.to_string(),
                    Some(message) => format!("{}. {}", message.trim_end_matches('.'), reason),
                    None if reason.is_empty() => status.as_str().to_string(),
                    None => reason.to_string(),
                }
            }
            other => other.to_string(),
        }
    }
}
