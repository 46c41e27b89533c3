use serde::{Deserialize, Serialize};

/// Where a keyword search is issued from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProbeLocation {
    Coords { lat: f64, lng: f64 },
    Address { address: String },
}

/// Search position of the target business for a single keyword.
///
/// `found == false` always comes with `rank == None` and `total_results == 0`.
/// Build values through [`KeywordRankResult::found`] /
/// [`KeywordRankResult::not_found`], or pass collaborator output through
/// [`KeywordRankResult::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRankResult {
    pub keyword: String,
    pub target_business: String,
    pub found: bool,
    pub rank: Option<u32>,
    pub total_results: u32,
    pub pages_checked: u32,
    #[serde(rename = "processing_time")]
    pub processing_time_seconds: f64,
}

impl KeywordRankResult {
    #[must_use]
    pub fn found(
        keyword: impl Into<String>,
        target_business: impl Into<String>,
        rank: u32,
        total_results: u32,
        pages_checked: u32,
    ) -> Self {
        let rank = rank.max(1);
        Self {
            keyword: keyword.into(),
            target_business: target_business.into(),
            found: true,
            rank: Some(rank),
            total_results: total_results.max(rank),
            pages_checked: pages_checked.max(1),
            processing_time_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn not_found(
        keyword: impl Into<String>,
        target_business: impl Into<String>,
        pages_checked: u32,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            target_business: target_business.into(),
            found: false,
            rank: None,
            total_results: 0,
            pages_checked: pages_checked.max(1),
            processing_time_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn with_processing_time(mut self, seconds: f64) -> Self {
        self.processing_time_seconds = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Coerce externally produced data into the result invariants.
    ///
    /// `rank` is authoritative: a positive rank means found, anything else
    /// means not found.
    #[must_use]
    pub fn normalized(self) -> Self {
        let seconds = self.processing_time_seconds;
        let base = match self.rank {
            Some(rank) if rank > 0 => Self::found(
                self.keyword,
                self.target_business,
                rank,
                self.total_results,
                self.pages_checked,
            ),
            _ => Self::not_found(self.keyword, self.target_business, self.pages_checked),
        };
        base.with_processing_time(seconds)
    }

    /// `true` when the invariants hold for this value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.rank {
            Some(rank) => {
                self.found && rank > 0 && self.total_results >= rank && self.pages_checked >= 1
            }
            None => !self.found && self.total_results == 0 && self.pages_checked >= 1,
        }
    }
}
