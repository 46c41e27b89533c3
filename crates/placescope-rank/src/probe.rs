//! Ordered, lazy keyword probing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, Stream};
use placescope_core::{AppConfig, KeywordRankResult};

use crate::error::{ProbeError, ValidationError};
use crate::http::HttpSearchProber;
use crate::prober::{ProbeQuery, SearchProber};
use crate::reference::ReferencePolicy;
use crate::request::ProbeRequest;

/// Runs probe requests keyword by keyword.
///
/// With a live prober configured, every keyword goes to it first; the
/// reference policy answers only for keywords the live prober could not.
pub struct RankProbe {
    live: Option<Arc<dyn SearchProber>>,
    reference: Arc<ReferencePolicy>,
    delay: Duration,
}

impl RankProbe {
    #[must_use]
    pub fn new(reference: Arc<ReferencePolicy>) -> Self {
        Self {
            live: None,
            reference,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_live(mut self, live: Arc<dyn SearchProber>) -> Self {
        self.live = Some(live);
        self
    }

    /// Pause between consecutive keywords. Zero disables the pause.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Build the probe described by the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] if a configured probe URL cannot be turned into
    /// an HTTP client.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProbeError> {
        let reference = match config.reference_seed {
            Some(seed) => ReferencePolicy::seeded(seed),
            None => ReferencePolicy::new(),
        }
        .with_localities(config.locality_tokens.iter().cloned());

        let mut probe = Self::new(Arc::new(reference))
            .with_delay(Duration::from_millis(config.probe_delay_ms));

        if let Some(url) = &config.probe_url {
            let live = HttpSearchProber::new(url, config.request_timeout_secs, &config.user_agent)?
                .with_retry(config.max_retries, config.retry_backoff_base_ms);
            probe = probe.with_live(Arc::new(live));
        }

        Ok(probe)
    }

    #[must_use]
    pub fn has_live(&self) -> bool {
        self.live.is_some()
    }

    /// Validate `request` and return the stream of its results.
    ///
    /// Nothing is probed until the stream is polled. Results come out in
    /// keyword order, one per keyword, and each keyword is fully resolved
    /// before the next one starts. Dropping the stream cancels the run.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the request is rejected; no keyword
    /// is probed in that case.
    pub fn probe(
        &self,
        request: &ProbeRequest,
    ) -> Result<impl Stream<Item = KeywordRankResult> + Send + '_, ValidationError> {
        let run = request.validated()?;
        tracing::info!(
            target_business = %run.target_business,
            keywords = run.keywords.len(),
            max_pages = run.max_pages,
            live = self.has_live(),
            "starting rank probe"
        );

        Ok(stream::unfold((run, 0usize), move |(run, index)| async move {
            let keyword = run.keywords.get(index)?;

            if index > 0 {
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                tokio::task::yield_now().await;
            }

            let started = Instant::now();
            let query = ProbeQuery {
                target_business: &run.target_business,
                keyword,
                location: run.location.as_ref(),
                max_pages: run.max_pages,
            };
            let result = self
                .resolve_one(&query)
                .await
                .with_processing_time(started.elapsed().as_secs_f64());

            tracing::debug!(
                keyword = %result.keyword,
                rank = ?result.rank,
                index,
                "keyword probed"
            );

            Some((result, (run, index + 1)))
        }))
    }

    async fn resolve_one(&self, query: &ProbeQuery<'_>) -> KeywordRankResult {
        if let Some(live) = &self.live {
            match live.probe_keyword(query).await {
                Ok(raw) => return query.adopt(raw),
                Err(e) => {
                    tracing::warn!(
                        prober = live.name(),
                        keyword = %query.keyword,
                        error = %e,
                        "live search prober unavailable; substituting reference policy"
                    );
                }
            }
        }
        self.reference.resolve(query)
    }
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
