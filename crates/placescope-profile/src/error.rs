use thiserror::Error;

/// Failures talking to the upstream profile provider.
///
/// Every variant means "upstream unavailable" to [`crate::resolve_profile`],
/// which degrades to the reference profile instead of surfacing the error.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile source URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
