//! Fusion of the profile score and the rank results into one report.
//!
//! Everything here is a pure function of its inputs: no clock, no random
//! draws, so aggregating the same state twice yields equal reports.

use placescope_core::grade::EXCELLENT_THRESHOLD;
use placescope_core::{Grade, KeywordRankResult, Priority, Recommendation, ScoreResult};
use placescope_rank::{classify, TierCounts};
use serde::{Deserialize, Serialize};

use crate::report::Report;

const PROFILE_SUMMARY_RECOMMENDATIONS: usize = 2;
const TOP_KEYWORD_RANK: u32 = 3;
const TOP_KEYWORD_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IntegratedReport {
    /// Neither a score nor rank results exist yet.
    InsufficientData,
    Ready(ReportSections),
}

impl IntegratedReport {
    #[must_use]
    pub fn sections(&self) -> Option<&ReportSections> {
        match self {
            IntegratedReport::InsufficientData => None,
            IntegratedReport::Ready(sections) => Some(sections),
        }
    }
}

/// Sections present in a ready report. `strategy` exists only when both
/// summaries do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSections {
    pub profile: Option<ProfileSummary>,
    pub ranking: Option<RankingSummary>,
    pub strategy: Option<CombinedStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub score: u8,
    pub grade: Grade,
    pub missing_count: usize,
    pub top_recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub total_keywords: usize,
    pub tiers: TierCounts,
    pub found_count: usize,
    /// Keywords ranked within positions 1..=10.
    pub top_ten_count: usize,
    /// Percentage of keywords found, rounded to one decimal.
    pub success_rate: f64,
    /// Up to three keywords ranked 1..=3, in input order.
    pub top_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedStrategy {
    /// Keywords classified `not_found` or `other`, in input order.
    pub low_rank_keywords: Vec<String>,
    /// Profile priority, ranking improvement, maintenance cadence.
    pub recommendations: [Recommendation; 3],
}

/// Combine whatever is available into an [`IntegratedReport`].
#[must_use]
pub fn aggregate(
    score: Option<&ScoreResult>,
    ranks: Option<&[KeywordRankResult]>,
) -> IntegratedReport {
    let ranks = ranks.filter(|r| !r.is_empty());
    if score.is_none() && ranks.is_none() {
        return IntegratedReport::InsufficientData;
    }

    let strategy = match (score, ranks) {
        (Some(score), Some(ranks)) => Some(combined_strategy(score, ranks)),
        _ => None,
    };

    IntegratedReport::Ready(ReportSections {
        profile: score.map(profile_summary),
        ranking: ranks.map(ranking_summary),
        strategy,
    })
}

impl Report {
    #[must_use]
    pub fn aggregate(&self) -> IntegratedReport {
        aggregate(self.score(), self.ranks())
    }
}

fn profile_summary(score: &ScoreResult) -> ProfileSummary {
    ProfileSummary {
        score: score.completeness_score,
        grade: score.grade(),
        missing_count: score.missing_elements.len(),
        top_recommendations: score
            .recommendations
            .iter()
            .take(PROFILE_SUMMARY_RECOMMENDATIONS)
            .cloned()
            .collect(),
    }
}

fn ranking_summary(ranks: &[KeywordRankResult]) -> RankingSummary {
    let tiers = TierCounts::tally(ranks);
    let total = tiers.total();

    RankingSummary {
        total_keywords: total,
        tiers,
        found_count: tiers.found(),
        top_ten_count: tiers.within_top_ten(),
        success_rate: success_rate(tiers.found(), total),
        top_keywords: ranks
            .iter()
            .filter(|r| r.rank.is_some_and(|rank| (1..=TOP_KEYWORD_RANK).contains(&rank)))
            .take(TOP_KEYWORD_LIMIT)
            .map(|r| r.keyword.clone())
            .collect(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (found as f64 / total as f64 * 1000.0).round() / 10.0
}

fn combined_strategy(score: &ScoreResult, ranks: &[KeywordRankResult]) -> CombinedStrategy {
    let low_rank_keywords: Vec<String> = ranks
        .iter()
        .filter(|r| classify(r).is_low())
        .map(|r| r.keyword.clone())
        .collect();

    let recommendations = [
        profile_priority(score),
        ranking_improvement(&low_rank_keywords),
        Recommendation::new(
            Priority::Low,
            "Re-check monthly",
            "Re-run the place analysis and the ranking check once a month and after every \
             profile update to catch regressions early.",
        ),
    ];

    CombinedStrategy {
        low_rank_keywords,
        recommendations,
    }
}

fn profile_priority(score: &ScoreResult) -> Recommendation {
    let value = score.completeness_score;
    let next_step = score.first_high_priority().map_or_else(
        || "fill in the missing profile elements".to_string(),
        |rec| format!("{}: {}", rec.title, rec.description),
    );

    if value < EXCELLENT_THRESHOLD {
        Recommendation::new(
            Priority::High,
            "Complete the place profile first",
            format!(
                "The profile scores {value}/100, below the {EXCELLENT_THRESHOLD}-point mark \
                 where listings rank reliably. Start with {next_step}"
            ),
        )
    } else {
        Recommendation::new(
            Priority::Medium,
            "Keep the place profile polished",
            format!(
                "The profile scores {value}/100. Keep it current; the next improvement is \
                 {next_step}"
            ),
        )
    }
}

fn ranking_improvement(low_rank_keywords: &[String]) -> Recommendation {
    match low_rank_keywords.len() {
        0 => Recommendation::new(
            Priority::Low,
            "Defend current keyword positions",
            "Every checked keyword already ranks in the top ten. Keep reviews and posts \
             coming to hold those positions.",
        ),
        count => Recommendation::new(
            Priority::High,
            format!("Improve rankings for {count} keyword(s)"),
            format!(
                "Work these keywords into the description, menu and posts: {}",
                low_rank_keywords.join(", ")
            ),
        ),
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
