//! Client for a live search-probing collaborator.

use std::time::Duration;

use async_trait::async_trait;
use placescope_core::KeywordRankResult;
use reqwest::{Client, Url};

use crate::error::ProbeError;
use crate::prober::{ProbeQuery, SearchProber};
use crate::retry::retry_with_backoff;

/// `POST {base}/probe` with a [`ProbeQuery`] body, answering with a
/// `KeywordRankResult`-shaped JSON document.
pub struct HttpSearchProber {
    client: Client,
    base_url: Url,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl HttpSearchProber {
    /// # Errors
    ///
    /// Returns [`ProbeError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ProbeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ProbeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries: 3,
            retry_backoff_base_ms: 1_000,
        })
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_base_ms = backoff_base_ms;
        self
    }

    fn endpoint(&self) -> Result<Url, ProbeError> {
        self.base_url
            .join("probe")
            .map_err(|e| ProbeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn request_once(
        &self,
        url: &Url,
        query: &ProbeQuery<'_>,
    ) -> Result<KeywordRankResult, ProbeError> {
        let response = self.client.post(url.clone()).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<KeywordRankResult>(&body).map_err(|source| {
            ProbeError::Deserialize {
                context: format!("probe result for keyword \"{}\"", query.keyword),
                source,
            }
        })
    }
}

#[async_trait]
impl SearchProber for HttpSearchProber {
    async fn probe_keyword(&self, query: &ProbeQuery<'_>) -> Result<KeywordRankResult, ProbeError> {
        let url = self.endpoint()?;
        let raw = retry_with_backoff(self.max_retries, self.retry_backoff_base_ms, || {
            self.request_once(&url, query)
        })
        .await?;
        Ok(query.adopt(raw))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
