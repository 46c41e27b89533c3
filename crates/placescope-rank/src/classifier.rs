//! Rank tiers used by scoring and display.

use placescope_core::KeywordRankResult;
use serde::{Deserialize, Serialize};

/// Display tier of a single keyword result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NotFound,
    First,
    TopTen,
    Other,
}

impl Tier {
    /// Tier for a raw position. A zero rank can only come from a malformed
    /// external document and counts as not found.
    #[must_use]
    pub fn from_rank(rank: Option<u32>) -> Self {
        match rank {
            None | Some(0) => Tier::NotFound,
            Some(1) => Tier::First,
            Some(2..=10) => Tier::TopTen,
            Some(_) => Tier::Other,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::NotFound => "not_found",
            Tier::First => "first",
            Tier::TopTen => "top_ten",
            Tier::Other => "other",
        }
    }

    /// `true` for tiers that need ranking work (not found or past page one).
    #[must_use]
    pub fn is_low(self) -> bool {
        matches!(self, Tier::NotFound | Tier::Other)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn classify(result: &KeywordRankResult) -> Tier {
    Tier::from_rank(result.rank)
}

/// Per-tier counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub first: usize,
    pub top_ten: usize,
    pub other: usize,
    pub not_found: usize,
}

impl TierCounts {
    #[must_use]
    pub fn tally<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a KeywordRankResult>,
    {
        results
            .into_iter()
            .fold(Self::default(), |mut counts, result| {
                match classify(result) {
                    Tier::First => counts.first += 1,
                    Tier::TopTen => counts.top_ten += 1,
                    Tier::Other => counts.other += 1,
                    Tier::NotFound => counts.not_found += 1,
                }
                counts
            })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.first + self.top_ten + self.other + self.not_found
    }

    #[must_use]
    pub fn found(&self) -> usize {
        self.first + self.top_ten + self.other
    }

    /// Keywords ranked somewhere in positions 1..=10.
    #[must_use]
    pub fn within_top_ten(&self) -> usize {
        self.first + self.top_ten
    }

    /// Keywords classified `not_found` or `other`.
    #[must_use]
    pub fn low(&self) -> usize {
        self.not_found + self.other
    }
}
