//! Reference rank policy used when no live prober answers.
//!
//! The policy does not search anything. It produces plausible positions from
//! the relationship between keyword and business name:
//!
//! 1. keyword and business share a locality token (configured, taken from an
//!    address location, or detected in the business name): rank 1;
//! 2. business name contains the keyword (case-insensitive): rank in 1..=5;
//! 3. otherwise rank in 1..=20 with probability 0.7, else not found.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use placescope_core::{KeywordRankResult, ProbeLocation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProbeError;
use crate::prober::{ProbeQuery, SearchProber};

const FOUND_PROBABILITY: f64 = 0.7;
const CONTAINED_MAX_RANK: u32 = 5;
const FALLBACK_MAX_RANK: u32 = 20;
const EXTRA_RESULTS: u32 = 30;
const RESULTS_PER_PAGE: u32 = 10;

/// Korean administrative suffixes, longest first so `광역시` wins over `시`.
const ADMIN_SUFFIXES: [&str; 12] = [
    "특별자치시",
    "특별자치도",
    "광역시",
    "특별시",
    "시",
    "군",
    "구",
    "동",
    "읍",
    "면",
    "리",
    "도",
];

/// Business-type suffixes, longest first.
const CATEGORY_SUFFIXES: [&str; 13] = [
    "아카데미",
    "교습소",
    "공부방",
    "학원",
    "스쿨",
    "학교",
    "센터",
    "카페",
    "의원",
    "병원",
    "치과",
    "약국",
    "식당",
];

/// Subject words that sit between a locality and the business type, as in
/// `벌원영어학원`.
const SUBJECT_SUFFIXES: [&str; 11] = [
    "태권도", "피아노", "영어", "수학", "국어", "과학", "논술", "미술", "음악", "코딩", "발레",
];

const MIN_STEM_CHARS: usize = 2;

fn push_stem(tokens: &mut Vec<String>, stem: &str) {
    if stem.chars().count() >= MIN_STEM_CHARS && !tokens.iter().any(|t| t == stem) {
        tokens.push(stem.to_string());
    }
}

fn strip_any<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| word.strip_suffix(suffix))
}

/// Locality stems embedded in a business name.
///
/// A word ending in a business-type suffix contributes what precedes the
/// suffix, minus a trailing subject word: `벌원학원` and `벌원영어학원` both
/// yield `["벌원"]`. In a multi-word name the leading words are taken as they
/// are, so `벌원 영어학원` also yields `["벌원"]`.
#[must_use]
pub fn locality_tokens_from_name(name: &str) -> Vec<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let mut tokens: Vec<String> = Vec::new();
    for (index, word) in words.iter().enumerate() {
        match strip_any(word, &CATEGORY_SUFFIXES) {
            Some(rest) => push_stem(
                &mut tokens,
                strip_any(rest, &SUBJECT_SUFFIXES).unwrap_or(rest),
            ),
            None if index + 1 < words.len() => push_stem(&mut tokens, word),
            None => {}
        }
    }
    tokens
}

/// Locality stems found in a street address.
///
/// Each whitespace-separated word that ends in an administrative suffix
/// contributes its stem when the stem is at least two characters long, so
/// `광주광역시 서구 벌원동 123-45` yields `["광주", "벌원"]`.
#[must_use]
pub fn locality_tokens_from_address(address: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in address.split_whitespace() {
        if let Some(stem) = strip_any(word, &ADMIN_SUFFIXES) {
            push_stem(&mut tokens, stem);
        }
    }
    tokens
}

pub struct ReferencePolicy {
    rng: Mutex<StdRng>,
    localities: Vec<String>,
}

impl ReferencePolicy {
    /// A policy drawing from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A policy whose draws are fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            localities: Vec::new(),
        }
    }

    /// Add locality tokens; blank entries are ignored.
    #[must_use]
    pub fn with_localities<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            let token: String = token.into();
            let token = token.trim();
            if !token.is_empty() && !self.localities.iter().any(|t| t == token) {
                self.localities.push(token.to_string());
            }
        }
        self
    }

    #[must_use]
    pub fn localities(&self) -> &[String] {
        &self.localities
    }

    /// The first locality token contained in both `keyword` and `target`.
    ///
    /// Configured tokens are checked first, then tokens derived from an
    /// address `location`, then tokens detected in `target` itself.
    #[must_use]
    pub fn shared_locality(
        &self,
        keyword: &str,
        target: &str,
        location: Option<&ProbeLocation>,
    ) -> Option<String> {
        let from_address = match location {
            Some(ProbeLocation::Address { address }) => locality_tokens_from_address(address),
            _ => Vec::new(),
        };
        let from_name = locality_tokens_from_name(target);
        self.localities
            .iter()
            .chain(from_address.iter())
            .chain(from_name.iter())
            .find(|token| keyword.contains(token.as_str()) && target.contains(token.as_str()))
            .cloned()
    }

    /// Resolve one keyword. Never fails.
    #[must_use]
    pub fn resolve(&self, query: &ProbeQuery<'_>) -> KeywordRankResult {
        let rank = if self
            .shared_locality(query.keyword, query.target_business, query.location)
            .is_some()
        {
            Some(1)
        } else if query
            .target_business
            .to_lowercase()
            .contains(&query.keyword.to_lowercase())
        {
            Some(self.draw(|rng| rng.random_range(1..=CONTAINED_MAX_RANK)))
        } else {
            self.draw(|rng| {
                rng.random_bool(FOUND_PROBABILITY)
                    .then(|| rng.random_range(1..=FALLBACK_MAX_RANK))
            })
        };

        match rank {
            Some(rank) => {
                let extra = self.draw(|rng| rng.random_range(0..EXTRA_RESULTS));
                KeywordRankResult::found(
                    query.keyword,
                    query.target_business,
                    rank,
                    rank + extra,
                    rank.div_ceil(RESULTS_PER_PAGE),
                )
            }
            None => {
                KeywordRankResult::not_found(query.keyword, query.target_business, query.max_pages)
            }
        }
    }

    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for ReferencePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReferencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferencePolicy")
            .field("localities", &self.localities)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchProber for ReferencePolicy {
    async fn probe_keyword(&self, query: &ProbeQuery<'_>) -> Result<KeywordRankResult, ProbeError> {
        Ok(self.resolve(query))
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}
