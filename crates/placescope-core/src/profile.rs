use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Placeholder the upstream provider writes when it could not read a field.
pub const MISSING_PLACEHOLDER: &str = "정보 없음";

/// A business profile as supplied by the upstream provider (or generated by
/// the reference profile path). Never mutated after it has been scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub details: ProfileDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    /// Average rating in `[0.0, 5.0]`.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDetails {
    pub description: String,
    pub facilities: Vec<String>,
    pub programs: Vec<String>,
    pub pricing: String,
    /// Image labels in display order.
    pub images: Vec<String>,
    pub coupons: Vec<String>,
    pub keywords: Vec<String>,
}

/// Returns `true` when a text field carries real content.
///
/// Empty, whitespace-only and [`MISSING_PLACEHOLDER`] values count as absent.
#[must_use]
pub fn is_present(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed != MISSING_PLACEHOLDER
}

impl ProfileRecord {
    /// Number of distinct non-blank entries in a set-valued field, compared
    /// after trimming.
    fn count_distinct(values: &[String]) -> usize {
        values
            .iter()
            .map(|v| v.trim())
            .filter(|v| is_present(v))
            .collect::<HashSet<_>>()
            .len()
    }

    #[must_use]
    pub fn facility_count(&self) -> usize {
        Self::count_distinct(&self.details.facilities)
    }

    #[must_use]
    pub fn program_count(&self) -> usize {
        Self::count_distinct(&self.details.programs)
    }

    /// Images are an ordered sequence, so repeated labels each count.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.details.images.iter().filter(|v| is_present(v)).count()
    }

    #[must_use]
    pub fn coupon_count(&self) -> usize {
        Self::count_distinct(&self.details.coupons)
    }

    #[must_use]
    pub fn keyword_count(&self) -> usize {
        Self::count_distinct(&self.details.keywords)
    }
}
