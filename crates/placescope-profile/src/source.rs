//! Upstream profile provider and the reference fallback.

use std::time::Duration;

use async_trait::async_trait;
use placescope_core::ProfileRecord;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::sample::{sample_profile, FALLBACK_BUSINESS_NAME};
use crate::url::extract_business_name;

/// Anything that can turn a place URL into a [`ProfileRecord`].
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the record for `profile_url`.
    ///
    /// # Errors
    ///
    /// Any error means the provider is unavailable for this URL.
    async fn fetch(&self, profile_url: &str) -> Result<ProfileRecord, ProfileError>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// Client for an HTTP profile provider exposing `GET {base}/profile?url=...`.
pub struct HttpProfileSource {
    client: Client,
    base_url: Url,
}

impl HttpProfileSource {
    /// # Errors
    ///
    /// Returns [`ProfileError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ProfileError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ProfileError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("profile")` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ProfileError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, profile_url: &str) -> Result<Url, ProfileError> {
        let mut url = self
            .base_url
            .join("profile")
            .map_err(|e| ProfileError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("url", profile_url);
        Ok(url)
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch(&self, profile_url: &str) -> Result<ProfileRecord, ProfileError> {
        let url = self.endpoint(profile_url)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<ProfileRecord>(&body).map_err(|source| {
            ProfileError::Deserialize {
                context: format!("profile for {profile_url}"),
                source,
            }
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Where a resolved record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileOrigin {
    Upstream,
    Reference,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub origin: ProfileOrigin,
    pub record: ProfileRecord,
}

/// Resolve a profile record, degrading to the reference profile.
///
/// With no source configured the reference profile is used directly. When the
/// source fails, the failure is logged at `warn` and the reference profile is
/// substituted; the returned [`ProfileOrigin`] tells the two apart.
pub async fn resolve_profile(
    source: Option<&dyn ProfileSource>,
    profile_url: &str,
) -> ResolvedProfile {
    if let Some(source) = source {
        match source.fetch(profile_url).await {
            Ok(record) => {
                tracing::info!(
                    source = source.name(),
                    business = %record.basic_info.name,
                    "profile fetched from upstream"
                );
                return ResolvedProfile {
                    origin: ProfileOrigin::Upstream,
                    record,
                };
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    url = profile_url,
                    error = %e,
                    "profile source unavailable; substituting reference profile"
                );
            }
        }
    }

    let business_name =
        extract_business_name(profile_url).unwrap_or_else(|| FALLBACK_BUSINESS_NAME.to_string());
    tracing::debug!(business = %business_name, "generating reference profile");

    ResolvedProfile {
        origin: ProfileOrigin::Reference,
        record: sample_profile(&business_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    #[async_trait]
    impl ProfileSource for Unreachable {
        async fn fetch(&self, profile_url: &str) -> Result<ProfileRecord, ProfileError> {
            Err(ProfileError::UnexpectedStatus {
                status: 503,
                url: profile_url.to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn no_source_uses_reference_profile() {
        let resolved = resolve_profile(None, "https://map.naver.com/p/search/벌원학원").await;
        assert_eq!(resolved.origin, ProfileOrigin::Reference);
        assert_eq!(resolved.record.basic_info.name, "벌원학원");
    }

    #[tokio::test]
    async fn failing_source_degrades_to_reference_profile() {
        let source = Unreachable;
        let resolved = resolve_profile(Some(&source), "https://example.com/").await;
        assert_eq!(resolved.origin, ProfileOrigin::Reference);
        assert_eq!(resolved.record.basic_info.name, FALLBACK_BUSINESS_NAME);
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_url() {
        let source =
            HttpProfileSource::new("http://localhost:9000/v1", 5, "test-agent").unwrap();
        let url = source.endpoint("https://map.naver.com/p/search/a b").unwrap();
        assert_eq!(url.path(), "/v1/profile");
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "url").map(|(_, v)| v.into_owned()),
            Some("https://map.naver.com/p/search/a b".to_string())
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpProfileSource::new("not a url", 5, "test-agent")
            .err()
            .expect("should fail");
        assert!(matches!(err, ProfileError::InvalidBaseUrl { .. }));
    }
}
