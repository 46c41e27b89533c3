use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Recommendation priority. Ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A structured recommendation. Rendering is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(priority: Priority, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Output of one profile evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-100 weighted completeness score.
    pub completeness_score: u8,
    pub missing_elements: Vec<String>,
    pub strengths: Vec<String>,
    /// Sorted high -> medium -> low, generation order preserved within a priority.
    pub recommendations: Vec<Recommendation>,
}

impl ScoreResult {
    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.completeness_score)
    }

    /// First recommendation with [`Priority::High`], if any.
    #[must_use]
    pub fn first_high_priority(&self) -> Option<&Recommendation> {
        self.recommendations
            .iter()
            .find(|r| r.priority == Priority::High)
    }
}
