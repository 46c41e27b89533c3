use thiserror::Error;

/// A probe request rejected before any keyword is probed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("target business name must be non-empty")]
    EmptyTarget,

    #[error("target business name is {len} characters; the limit is {max}")]
    TargetTooLong { len: usize, max: usize },

    #[error("at least one keyword is required")]
    NoKeywords,

    #[error("{count} keywords submitted; the limit is {max}")]
    TooManyKeywords { count: usize, max: usize },

    #[error("keyword #{index} is empty")]
    EmptyKeyword { index: usize },

    #[error("duplicate keyword \"{0}\"")]
    DuplicateKeyword(String),

    #[error("max_pages must be between 1 and {max}, got {got}")]
    MaxPagesOutOfRange { got: u32, max: u32 },

    #[error("coordinates out of range: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("location address must be non-empty")]
    EmptyAddress,
}

/// Failures of a live search-probing collaborator.
///
/// [`crate::RankProbe`] treats every variant as "upstream unavailable" and
/// answers that keyword from the reference policy instead.
#[derive(Debug, Error)]
pub enum ProbeError {
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

    #[error("invalid probe URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
