use placescope_core::{KeywordRankResult, ScoreResult};

/// Current analysis state, owned by whoever drives the analysis.
///
/// The score and the rank results are independent: either may be present
/// without the other, and replacing one leaves the other alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    score: Option<ScoreResult>,
    ranks: Option<Vec<KeywordRankResult>>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_score(&mut self, score: ScoreResult) {
        self.score = Some(score);
    }

    pub fn set_ranks(&mut self, ranks: Vec<KeywordRankResult>) {
        self.ranks = Some(ranks);
    }

    /// Start a new ranking run, discarding the previous run's results.
    pub fn begin_ranking(&mut self) {
        self.ranks = Some(Vec::new());
    }

    /// Append one streamed result to the current run.
    pub fn record_rank(&mut self, result: KeywordRankResult) {
        self.ranks.get_or_insert_with(Vec::new).push(result);
    }

    pub fn clear(&mut self) {
        self.score = None;
        self.ranks = None;
    }

    #[must_use]
    pub fn score(&self) -> Option<&ScoreResult> {
        self.score.as_ref()
    }

    /// Rank results of the current run. A run that has not emitted anything
    /// yet counts as absent.
    #[must_use]
    pub fn ranks(&self) -> Option<&[KeywordRankResult]> {
        self.ranks.as_deref().filter(|ranks| !ranks.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.score().is_none() && self.ranks().is_none()
    }

    pub(crate) fn from_parts(
        score: Option<ScoreResult>,
        ranks: Option<Vec<KeywordRankResult>>,
    ) -> Self {
        Self { score, ranks }
    }
}
