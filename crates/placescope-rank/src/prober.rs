use async_trait::async_trait;
use placescope_core::{KeywordRankResult, ProbeLocation};
use serde::Serialize;

use crate::error::ProbeError;

/// One keyword lookup, borrowed from the validated request of a run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbeQuery<'a> {
    pub target_business: &'a str,
    pub keyword: &'a str,
    pub location: Option<&'a ProbeLocation>,
    pub max_pages: u32,
}

impl ProbeQuery<'_> {
    /// Take a collaborator's answer for this query as our own.
    ///
    /// Keyword and target are copied from the query and the result is
    /// normalized, so whatever the collaborator echoed back is ignored.
    #[must_use]
    pub fn adopt(&self, raw: KeywordRankResult) -> KeywordRankResult {
        KeywordRankResult {
            keyword: self.keyword.to_string(),
            target_business: self.target_business.to_string(),
            ..raw
        }
        .normalized()
    }
}

/// Anything that can report where `target_business` appears for a keyword.
#[async_trait]
pub trait SearchProber: Send + Sync {
    /// Look up the position of the target for one keyword.
    ///
    /// # Errors
    ///
    /// Any error means the prober is unavailable for this keyword. A
    /// genuine "not in the results" answer is `Ok` with `found == false`.
    async fn probe_keyword(&self, query: &ProbeQuery<'_>) -> Result<KeywordRankResult, ProbeError>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopt_overrides_echo_and_normalizes() {
        let query = ProbeQuery {
            target_business: "벌원학원",
            keyword: "영어학원",
            location: None,
            max_pages: 3,
        };
        let raw = KeywordRankResult {
            keyword: "something else".to_string(),
            target_business: String::new(),
            found: true,
            rank: None,
            total_results: 40,
            pages_checked: 0,
            processing_time_seconds: 0.4,
        };
        let adopted = query.adopt(raw);
        assert_eq!(adopted.keyword, "영어학원");
        assert_eq!(adopted.target_business, "벌원학원");
        assert!(!adopted.found);
        assert_eq!(adopted.total_results, 0);
        assert!(adopted.is_consistent());
    }
}
