//! Grade bands for a completeness score.
//!
//! The thresholds live here and nowhere else: the profile scorer, the report
//! aggregator and both outer surfaces all go through [`Grade::from_score`].

use serde::{Deserialize, Serialize};

/// Lowest score graded [`Grade::Excellent`].
pub const EXCELLENT_THRESHOLD: u8 = 80;
/// Lowest score graded [`Grade::Fair`].
pub const FAIR_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl Grade {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Grade::Excellent
        } else if score >= FAIR_THRESHOLD {
            Grade::Fair
        } else {
            Grade::NeedsImprovement
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::Fair => "fair",
            Grade::NeedsImprovement => "needs improvement",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Fair);
        assert_eq!(Grade::from_score(60), Grade::Fair);
        assert_eq!(Grade::from_score(59), Grade::NeedsImprovement);
        assert_eq!(Grade::from_score(0), Grade::NeedsImprovement);
    }

    #[test]
    fn every_score_maps_to_exactly_one_band() {
        for score in 0..=100u8 {
            let grade = Grade::from_score(score);
            let expected = match score {
                80..=100 => Grade::Excellent,
                60..=79 => Grade::Fair,
                _ => Grade::NeedsImprovement,
            };
            assert_eq!(grade, expected, "score {score}");
        }
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Grade::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs improvement\"");
        assert_eq!(Grade::Fair.to_string(), "fair");
    }
}
