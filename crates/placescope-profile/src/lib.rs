//! Profile completeness scoring for placescope.
//!
//! Scores a [`ProfileRecord`](placescope_core::ProfileRecord) against a
//! weighted rubric, and resolves records from the upstream provider with a
//! reference-profile fallback when the provider is unavailable.

pub mod error;
pub mod sample;
pub mod scorer;
pub mod source;
pub mod url;

pub use error::ProfileError;
pub use sample::{sample_profile, FALLBACK_BUSINESS_NAME};
pub use scorer::score;
pub use source::{resolve_profile, HttpProfileSource, ProfileOrigin, ProfileSource, ResolvedProfile};
pub use url::extract_business_name;
