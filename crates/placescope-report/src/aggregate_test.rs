use super::*;

fn score_with(value: u8, recommendations: Vec<Recommendation>) -> ScoreResult {
    ScoreResult {
        completeness_score: value,
        missing_elements: vec!["coupons".to_string(), "keywords".to_string()],
        strengths: Vec::new(),
        recommendations,
    }
}

fn recs() -> Vec<Recommendation> {
    vec![
        Recommendation::new(Priority::High, "Register search keywords", "Add keywords."),
        Recommendation::new(Priority::Medium, "Add more photos", "Upload photos."),
        Recommendation::new(Priority::Low, "Offer a coupon or trial", "Add a coupon."),
    ]
}

fn ranks() -> Vec<KeywordRankResult> {
    vec![
        KeywordRankResult::found("벌원 영어학원", "벌원학원", 1, 12, 1),
        KeywordRankResult::found("영어학원", "벌원학원", 3, 20, 1),
        KeywordRankResult::found("초등영어", "벌원학원", 14, 30, 2),
        KeywordRankResult::not_found("수학학원", "벌원학원", 3),
        KeywordRankResult::found("파닉스", "벌원학원", 2, 8, 1),
        KeywordRankResult::found("회화", "벌원학원", 3, 9, 1),
    ]
}

#[test]
fn nothing_present_is_insufficient_data() {
    let report = aggregate(None, None);
    assert_eq!(report, IntegratedReport::InsufficientData);
    assert!(report.sections().is_none());
}

#[test]
fn empty_rank_list_counts_as_absent() {
    assert_eq!(aggregate(None, Some([].as_slice())), IntegratedReport::InsufficientData);
}

#[test]
fn score_only_has_profile_section() {
    let score = score_with(72, recs());
    let report = aggregate(Some(&score), None);
    let sections = report.sections().expect("ready");

    let profile = sections.profile.as_ref().expect("profile summary");
    assert_eq!(profile.score, 72);
    assert_eq!(profile.grade, Grade::Fair);
    assert_eq!(profile.missing_count, 2);
    assert_eq!(profile.top_recommendations.len(), 2);
    assert_eq!(profile.top_recommendations[0].title, "Register search keywords");

    assert!(sections.ranking.is_none());
    assert!(sections.strategy.is_none());
}

#[test]
fn ranks_only_has_ranking_section() {
    let ranks = ranks();
    let report = aggregate(None, Some(ranks.as_slice()));
    let sections = report.sections().expect("ready");
    assert!(sections.profile.is_none());
    assert!(sections.strategy.is_none());

    let ranking = sections.ranking.as_ref().expect("ranking summary");
    assert_eq!(ranking.total_keywords, 6);
    assert_eq!(
        ranking.tiers,
        TierCounts {
            first: 1,
            top_ten: 3,
            other: 1,
            not_found: 1,
        }
    );
    assert_eq!(ranking.found_count, 5);
    assert_eq!(ranking.top_ten_count, 4);
    assert!((ranking.success_rate - 83.3).abs() < f64::EPSILON);
    assert_eq!(
        ranking.top_keywords,
        vec!["벌원 영어학원", "영어학원", "파닉스"]
    );
}

#[test]
fn success_rate_rounds_to_one_decimal() {
    assert!((success_rate(2, 3) - 66.7).abs() < f64::EPSILON);
    assert!((success_rate(1, 3) - 33.3).abs() < f64::EPSILON);
    assert!((success_rate(4, 4) - 100.0).abs() < f64::EPSILON);
    assert!(success_rate(0, 0).abs() < f64::EPSILON);
}

#[test]
fn both_present_adds_three_slot_strategy() {
    let score = score_with(65, recs());
    let ranks = ranks();
    let report = aggregate(Some(&score), Some(ranks.as_slice()));
    let strategy = report
        .sections()
        .and_then(|s| s.strategy.as_ref())
        .expect("strategy");

    assert_eq!(strategy.low_rank_keywords, vec!["초등영어", "수학학원"]);

    let [profile, ranking, cadence] = &strategy.recommendations;
    assert_eq!(profile.priority, Priority::High);
    assert!(profile.description.contains("65/100"));
    assert!(profile.description.contains("Register search keywords"));
    assert_eq!(ranking.priority, Priority::High);
    assert!(ranking.title.contains('2'));
    assert!(ranking.description.contains("초등영어, 수학학원"));
    assert_eq!(cadence.priority, Priority::Low);
}

#[test]
fn profile_slot_switches_at_excellent_threshold() {
    let ranks = ranks();

    let below = aggregate(Some(&score_with(79, recs())), Some(ranks.as_slice()));
    let above = aggregate(Some(&score_with(80, recs())), Some(ranks.as_slice()));

    let slot = |r: &IntegratedReport| {
        r.sections()
            .and_then(|s| s.strategy.as_ref())
            .map(|s| s.recommendations[0].priority)
    };
    assert_eq!(slot(&below), Some(Priority::High));
    assert_eq!(slot(&above), Some(Priority::Medium));
}

#[test]
fn profile_slot_falls_back_without_high_priority() {
    let score = score_with(50, vec![Recommendation::new(Priority::Low, "x", "y")]);
    let ranks = ranks();
    let report = aggregate(Some(&score), Some(ranks.as_slice()));
    let first = &report
        .sections()
        .and_then(|s| s.strategy.as_ref())
        .expect("strategy")
        .recommendations[0];
    assert!(first.description.contains("fill in the missing profile elements"));
}

#[test]
fn no_low_rank_keywords_gives_defend_slot() {
    let score = score_with(90, Vec::new());
    let ranks = vec![
        KeywordRankResult::found("a", "t", 1, 4, 1),
        KeywordRankResult::found("b", "t", 7, 9, 1),
    ];
    let report = aggregate(Some(&score), Some(ranks.as_slice()));
    let strategy = report
        .sections()
        .and_then(|s| s.strategy.as_ref())
        .expect("strategy");
    assert!(strategy.low_rank_keywords.is_empty());
    assert_eq!(strategy.recommendations[1].priority, Priority::Low);
}

#[test]
fn aggregation_is_idempotent() {
    let mut report = Report::new();
    report.set_score(score_with(65, recs()));
    report.set_ranks(ranks());

    let first = report.aggregate();
    let second = report.aggregate();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn serializes_with_status_tag() {
    let json = serde_json::to_value(aggregate(None, None)).unwrap();
    assert_eq!(json, serde_json::json!({"status": "insufficient_data"}));

    let score = score_with(90, Vec::new());
    let json = serde_json::to_value(aggregate(Some(&score), None)).unwrap();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["profile"]["grade"], "excellent");
    assert!(json["ranking"].is_null());
}
