//! Plain-text rendering for terminal output.

use placescope_core::{KeywordRankResult, Recommendation, ScoreResult};
use placescope_profile::{ProfileOrigin, ResolvedProfile};
use placescope_rank::{classify, Tier};
use placescope_report::{IntegratedReport, ProfileSummary, RankingSummary};

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::First => "1st place",
        Tier::TopTen => "top 10",
        Tier::Other => "beyond top 10",
        Tier::NotFound => "not found",
    }
}

fn rank_cell(result: &KeywordRankResult) -> String {
    result
        .rank
        .map_or_else(|| "-".to_string(), |rank| format!("#{rank}"))
}

fn recommendation_line(rec: &Recommendation) -> String {
    format!("  [{}] {}: {}", rec.priority, rec.title, rec.description)
}

pub(crate) fn progress_line(done: usize, total: usize, result: &KeywordRankResult) -> String {
    format!(
        "[{done}/{total}] {} -> {} ({}, {:.2}s)",
        result.keyword,
        rank_cell(result),
        tier_label(classify(result)),
        result.processing_time_seconds
    )
}

pub(crate) fn place_analysis(resolved: &ResolvedProfile, score: &ScoreResult) -> String {
    let info = &resolved.record.basic_info;
    let mut lines = vec![
        format!("{} ({})", info.name, info.category),
        format!(
            "Score: {}/100 ({})",
            score.completeness_score,
            score.grade()
        ),
    ];
    if resolved.origin == ProfileOrigin::Reference {
        lines.push("Source: reference profile (no live profile source)".to_string());
    }
    if !score.missing_elements.is_empty() {
        lines.push(format!("Missing: {}", score.missing_elements.join(", ")));
    }
    if !score.strengths.is_empty() {
        lines.push(format!("Strengths: {}", score.strengths.join(", ")));
    }
    if !score.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        lines.extend(score.recommendations.iter().map(recommendation_line));
    }
    lines.join("\n")
}

pub(crate) fn ranking_table(results: &[KeywordRankResult]) -> String {
    if results.is_empty() {
        return "no ranking results".to_string();
    }

    let mut lines = vec![format!(
        "{:<24}{:<8}{:<16}{:<8}PAGES",
        "KEYWORD", "RANK", "TIER", "TOTAL"
    )];
    for r in results {
        lines.push(format!(
            "{:<24}{:<8}{:<16}{:<8}{}",
            r.keyword,
            rank_cell(r),
            tier_label(classify(r)),
            r.total_results,
            r.pages_checked
        ));
    }
    lines.join("\n")
}

fn profile_section(profile: &ProfileSummary) -> Vec<String> {
    let mut lines = vec![
        "== Place profile ==".to_string(),
        format!(
            "Score: {}/100 ({}), {} missing element(s)",
            profile.score, profile.grade, profile.missing_count
        ),
    ];
    lines.extend(profile.top_recommendations.iter().map(recommendation_line));
    lines
}

fn ranking_section(ranking: &RankingSummary) -> Vec<String> {
    let mut lines = vec![
        "== Keyword ranking ==".to_string(),
        format!(
            "{} keyword(s): {} first, {} top 10, {} beyond, {} not found",
            ranking.total_keywords,
            ranking.tiers.first,
            ranking.tiers.top_ten,
            ranking.tiers.other,
            ranking.tiers.not_found
        ),
        format!(
            "Found {} ({:.1}%), within top 10: {}",
            ranking.found_count, ranking.success_rate, ranking.top_ten_count
        ),
    ];
    if !ranking.top_keywords.is_empty() {
        lines.push(format!("Top keywords: {}", ranking.top_keywords.join(", ")));
    }
    lines
}

pub(crate) fn integrated_report(report: &IntegratedReport) -> String {
    let Some(sections) = report.sections() else {
        return "not enough data: run a place analysis or a ranking check first".to_string();
    };

    let mut blocks: Vec<Vec<String>> = Vec::new();
    if let Some(profile) = &sections.profile {
        blocks.push(profile_section(profile));
    }
    if let Some(ranking) = &sections.ranking {
        blocks.push(ranking_section(ranking));
    }
    if let Some(strategy) = &sections.strategy {
        let mut lines = vec!["== Strategy ==".to_string()];
        lines.extend(strategy.recommendations.iter().map(recommendation_line));
        blocks.push(lines);
    }

    blocks
        .iter()
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
