use std::collections::HashSet;

use placescope_core::{is_present, ProbeLocation, ProbePlan};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MAX_TARGET_CHARS: usize = 100;
pub const MAX_KEYWORDS: usize = 20;
pub const MAX_PAGES: u32 = 5;
pub const DEFAULT_MAX_PAGES: u32 = 3;

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

/// Input of a single probe run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRequest {
    pub target_business: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub location: Option<ProbeLocation>,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl ProbeRequest {
    #[must_use]
    pub fn new(target_business: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            target_business: target_business.into(),
            keywords,
            location: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: ProbeLocation) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Use `address` as the location when the request has none. Blank and
    /// placeholder addresses leave the request unchanged.
    #[must_use]
    pub fn or_address(mut self, address: &str) -> Self {
        if self.location.is_none() && is_present(address) {
            self.location = Some(ProbeLocation::Address {
                address: address.trim().to_string(),
            });
        }
        self
    }

    /// Build a request from a saved plan, filling `max_pages` from
    /// `default_max_pages` when the plan leaves it out.
    #[must_use]
    pub fn from_plan(plan: ProbePlan, default_max_pages: u32) -> Self {
        Self {
            target_business: plan.target_business,
            keywords: plan.keywords,
            location: plan.location,
            max_pages: plan.max_pages.unwrap_or(default_max_pages),
        }
    }

    /// Check every input rule and return a trimmed, owned copy.
    ///
    /// The copy is what a probe run iterates over, so later changes to the
    /// caller's request cannot affect a run in progress.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking the target,
    /// then the keywords in order, then `max_pages`, then the location.
    pub fn validated(&self) -> Result<ProbeRequest, ValidationError> {
        let target = self.target_business.trim();
        if target.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }
        let target_len = target.chars().count();
        if target_len > MAX_TARGET_CHARS {
            return Err(ValidationError::TargetTooLong {
                len: target_len,
                max: MAX_TARGET_CHARS,
            });
        }

        if self.keywords.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        if self.keywords.len() > MAX_KEYWORDS {
            return Err(ValidationError::TooManyKeywords {
                count: self.keywords.len(),
                max: MAX_KEYWORDS,
            });
        }

        let mut seen = HashSet::with_capacity(self.keywords.len());
        let mut keywords = Vec::with_capacity(self.keywords.len());
        for (index, raw) in self.keywords.iter().enumerate() {
            let keyword = raw.trim();
            if keyword.is_empty() {
                return Err(ValidationError::EmptyKeyword { index });
            }
            if !seen.insert(keyword) {
                return Err(ValidationError::DuplicateKeyword(keyword.to_string()));
            }
            keywords.push(keyword.to_string());
        }

        if !(1..=MAX_PAGES).contains(&self.max_pages) {
            return Err(ValidationError::MaxPagesOutOfRange {
                got: self.max_pages,
                max: MAX_PAGES,
            });
        }

        let location = match &self.location {
            Some(ProbeLocation::Coords { lat, lng }) => {
                if !((-90.0..=90.0).contains(lat) && (-180.0..=180.0).contains(lng)) {
                    return Err(ValidationError::InvalidCoordinates {
                        lat: *lat,
                        lng: *lng,
                    });
                }
                Some(ProbeLocation::Coords {
                    lat: *lat,
                    lng: *lng,
                })
            }
            Some(ProbeLocation::Address { address }) => {
                let address = address.trim();
                if address.is_empty() {
                    return Err(ValidationError::EmptyAddress);
                }
                Some(ProbeLocation::Address {
                    address: address.to_string(),
                })
            }
            None => None,
        };

        Ok(ProbeRequest {
            target_business: target.to_string(),
            keywords,
            location,
            max_pages: self.max_pages,
        })
    }
}
