//! Keyword rank probing and classification for placescope.
//!
//! A [`RankProbe`] validates a [`ProbeRequest`] and then resolves each keyword
//! in order through a [`SearchProber`]: either a live collaborator such as
//! [`HttpSearchProber`], or the [`ReferencePolicy`] that stands in when no
//! live collaborator is configured or reachable. Results are emitted one at a
//! time as a lazy stream and classified into a [`Tier`].

pub mod classifier;
pub mod error;
pub mod http;
pub mod probe;
pub mod prober;
pub mod reference;
pub mod request;

mod retry;

pub use classifier::{classify, Tier, TierCounts};
pub use error::{ProbeError, ValidationError};
pub use http::HttpSearchProber;
pub use probe::RankProbe;
pub use prober::{ProbeQuery, SearchProber};
pub use reference::{
    locality_tokens_from_address, locality_tokens_from_name, ReferencePolicy,
};
pub use request::{ProbeRequest, DEFAULT_MAX_PAGES, MAX_KEYWORDS, MAX_PAGES, MAX_TARGET_CHARS};
