//! Portable export document.
//!
//! ```json
//! {
//!   "timestamp": "2026-10-19T09:30:00Z",
//!   "place_analysis": { "completeness_score": 85, ... },
//!   "ranking_check": [ { "keyword": "...", "rank": 1, ... } ],
//!   "summary": {
//!     "place_score": 85,
//!     "ranking_summary": {
//!       "total_keywords": 2,
//!       "first_place_count": 1,
//!       "top_ten_count": 2,
//!       "found_count": 2
//!     }
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use placescope_core::{KeywordRankResult, ScoreResult};
use placescope_rank::TierCounts;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub timestamp: DateTime<Utc>,
    pub place_analysis: Option<ScoreResult>,
    pub ranking_check: Option<Vec<KeywordRankResult>>,
    pub summary: ExportSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub place_score: Option<u8>,
    pub ranking_summary: Option<ExportRankingSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRankingSummary {
    pub total_keywords: usize,
    pub first_place_count: usize,
    pub top_ten_count: usize,
    pub found_count: usize,
}

impl ExportRankingSummary {
    fn from_ranks(ranks: &[KeywordRankResult]) -> Self {
        let tiers = TierCounts::tally(ranks);
        Self {
            total_keywords: tiers.total(),
            first_place_count: tiers.first,
            top_ten_count: tiers.within_top_ten(),
            found_count: tiers.found(),
        }
    }
}

/// Export the report stamped with the current time.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] when the report holds neither a score nor
/// rank results.
pub fn export(report: &Report) -> Result<ExportDocument, ExportError> {
    export_at(report, Utc::now())
}

/// Export the report with an explicit timestamp.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] when the report holds neither a score nor
/// rank results.
pub fn export_at(report: &Report, timestamp: DateTime<Utc>) -> Result<ExportDocument, ExportError> {
    if report.is_empty() {
        return Err(ExportError::NoData);
    }

    let place_analysis = report.score().cloned();
    let ranking_check = report.ranks().map(<[KeywordRankResult]>::to_vec);

    let summary = ExportSummary {
        place_score: place_analysis.as_ref().map(|s| s.completeness_score),
        ranking_summary: ranking_check
            .as_deref()
            .map(ExportRankingSummary::from_ranks),
    };

    tracing::debug!(
        has_score = place_analysis.is_some(),
        keywords = ranking_check.as_ref().map_or(0, Vec::len),
        "report exported"
    );

    Ok(ExportDocument {
        timestamp,
        place_analysis,
        ranking_check,
        summary,
    })
}

impl ExportDocument {
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a previously exported document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if `json` is not an export document.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Restore the report the document was exported from.
    #[must_use]
    pub fn into_report(self) -> Report {
        Report::from_parts(self.place_analysis, self.ranking_check)
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        default_file_name(self.timestamp)
    }
}

/// `placescope-report-YYYYMMDD-HHMMSS.json` for `timestamp`.
#[must_use]
pub fn default_file_name(timestamp: DateTime<Utc>) -> String {
    format!("placescope-report-{}.json", timestamp.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use placescope_core::{Priority, Recommendation};

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 5).unwrap()
    }

    fn score() -> ScoreResult {
        ScoreResult {
            completeness_score: 85,
            missing_elements: vec!["coupons".to_string()],
            strengths: vec!["complete basic information".to_string()],
            recommendations: vec![Recommendation::new(
                Priority::Low,
                "Offer a coupon or trial",
                "A trial lesson lowers the barrier.",
            )],
        }
    }

    fn ranks() -> Vec<KeywordRankResult> {
        vec![
            KeywordRankResult::found("벌원 영어학원", "벌원학원", 1, 14, 1)
                .with_processing_time(1.25),
            KeywordRankResult::found("영어학원", "벌원학원", 1, 3, 1),
            KeywordRankResult::found("초등영어", "벌원학원", 7, 22, 1),
            KeywordRankResult::found("중등영어", "벌원학원", 18, 40, 2),
            KeywordRankResult::not_found("수학", "벌원학원", 3).with_processing_time(3.5),
        ]
    }

    fn full_report() -> Report {
        let mut report = Report::new();
        report.set_score(score());
        report.set_ranks(ranks());
        report
    }

    #[test]
    fn empty_report_has_no_data() {
        assert!(matches!(
            export_at(&Report::new(), fixed_time()),
            Err(ExportError::NoData)
        ));

        let mut report = Report::new();
        report.begin_ranking();
        assert!(matches!(export(&report), Err(ExportError::NoData)));
    }

    #[test]
    fn first_place_count_matches_first_tier() {
        let doc = export_at(&full_report(), fixed_time()).unwrap();
        let ranking = doc.summary.ranking_summary.expect("ranking summary");

        let first_tier = ranks()
            .iter()
            .filter(|r| placescope_rank::classify(r) == placescope_rank::Tier::First)
            .count();
        assert_eq!(ranking.first_place_count, first_tier);
        assert_eq!(
            ranking,
            ExportRankingSummary {
                total_keywords: 5,
                first_place_count: 2,
                top_ten_count: 3,
                found_count: 4,
            }
        );
        assert_eq!(doc.summary.place_score, Some(85));
    }

    #[test]
    fn score_only_export_has_null_ranking() {
        let mut report = Report::new();
        report.set_score(score());
        let doc = export_at(&report, fixed_time()).unwrap();

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["ranking_check"].is_null());
        assert!(json["summary"]["ranking_summary"].is_null());
        assert_eq!(json["summary"]["place_score"], 85);
        assert_eq!(json["timestamp"], "2026-10-19T09:30:05Z");
    }

    #[test]
    fn json_round_trip_restores_report() {
        let original = full_report();
        let doc = export_at(&original, fixed_time()).unwrap();

        let json = doc.to_json_pretty().unwrap();
        let parsed = ExportDocument::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.into_report(), original);
    }

    #[test]
    fn malformed_document_is_json_error() {
        assert!(matches!(
            ExportDocument::from_json("{\"timestamp\": 3}"),
            Err(ExportError::Json(_))
        ));
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        assert_eq!(
            default_file_name(fixed_time()),
            "placescope-report-20261019-093005.json"
        );
        let doc = export_at(&full_report(), fixed_time()).unwrap();
        assert_eq!(doc.file_name(), "placescope-report-20261019-093005.json");
    }
}
