use super::*;
use chrono::{TimeZone, Utc};

fn reasons(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_caps_ratio_empty_title_is_zero() {
    assert_eq!(caps_ratio(""), 0.0);
}

#[test]
fn test_caps_ratio_counts_ascii_uppercase_over_all_chars() {
    assert_eq!(caps_ratio("AB"), 1.0);
    assert_eq!(caps_ratio("Ab"), 0.5);
    assert_eq!(caps_ratio("A b"), 1.0 / 3.0);
}

#[test]
fn test_caps_ratio_counts_utf16_units() {
    assert_eq!(caps_ratio("AB😀"), 0.5);
    assert_eq!(calculate_score("AB😀"), 0);
    assert_eq!(caps_ratio("ABÉ"), 2.0 / 3.0);
}

#[test]
fn test_caps_ratio_ignores_non_ascii_uppercase() {
    assert_eq!(caps_ratio("ÉÉÉÉ"), 0.0);
}

#[test]
fn test_punctuation_runs_are_non_overlapping() {
    assert_eq!(punctuation_runs("Hello!"), 0);
    assert_eq!(punctuation_runs("Hello!!"), 1);
    assert_eq!(punctuation_runs("Hello!?!?!"), 1);
    assert_eq!(punctuation_runs("Wait!! What?? No!!"), 3);
}

#[test]
fn test_scenario_you_wont_believe() {
    let card = HeuristicScorer::new().evaluate("You Won't Believe What Happened Next!!");

    // keyword 15 + punctuation run 10 + vague "WHAT" 5
    assert_eq!(card.score, 30);
    assert!(card.score >= 25);
    assert_eq!(
        card.reasons,
        reasons(&[REASON_PUNCTUATION, "Uses \"you won't believe\" hook"])
    );
    assert!(card.tier() >= VerdictTier::Minor);
    assert_eq!(card.verdict, "Minor clickbait elements present.");
}

#[test]
fn test_scenario_genuine_title() {
    let card = HeuristicScorer::new().evaluate("Weekly Community Update — March Recap");

    assert_eq!(card.score, 0);
    assert_eq!(card.reasons, reasons(&[REASON_GENUINE]));
    assert_eq!(card.verdict, "Appears to be genuine content.");
    assert_eq!(card.tier(), VerdictTier::Genuine);
}

#[test]
fn test_scenario_all_caps_without_keywords() {
    let card = HeuristicScorer::new().evaluate("NEW VIDEO IS LIVE");

    assert_eq!(card.score, 30);
    assert_eq!(card.reasons, reasons(&[REASON_CAPS]));
    assert_eq!(card.verdict, "Minor clickbait elements present.");
}

#[test]
fn test_empty_title_is_genuine() {
    let card = HeuristicScorer::new().evaluate("");

    assert_eq!(card.score, 0);
    assert_eq!(card.reasons, reasons(&[REASON_GENUINE]));
    assert_eq!(card.verdict, "Appears to be genuine content.");
}

#[test]
fn test_highly_likely_title_lists_reasons() {
    let card = HeuristicScorer::new().evaluate("SHOCKING!!! YOU WON'T BELIEVE THIS TRICK");

    // caps 30 + two keywords 30 + one run 10 + "THIS" and "TRICK" 10
    assert_eq!(card.score, 80);
    assert_eq!(card.tier(), VerdictTier::HighlyLikely);
    assert_eq!(
        card.verdict,
        "Highly likely clickbait. Proceed with caution. (Excessive use of capital letters, \
         Excessive punctuation for emphasis, Uses \"you won't believe\" hook, \
         Sensationalized language)"
    );
}

#[test]
fn test_score_is_clamped_to_100() {
    let title = "SHOCKING INSANE CRAZY UNBELIEVABLE MIND BLOWING GONE WRONG MUST WATCH \
                 WILL SHOCK YOU!!?? WHY HOW";
    assert_eq!(calculate_score(title), 100);
}

#[test]
fn test_each_keyword_counts_once() {
    assert_eq!(calculate_score("shocking shocking shocking"), 15);
}

#[test]
fn test_keywords_match_case_insensitively() {
    assert_eq!(calculate_score("this is insane"), 15 + 5);
}

#[test]
fn test_vague_words_match_as_substrings() {
    // "SHOW" contains "HOW"
    assert_eq!(calculate_score("Show me"), 5);
}

#[test]
fn test_multiple_punctuation_runs_each_score() {
    // three runs 30 + "WHAT" 5
    assert_eq!(calculate_score("Wait!! What?? No!!"), 35);
}

#[test]
fn test_vague_promise_reason() {
    let found = identify_reasons("This video will change your life");
    assert_eq!(found, reasons(&["Vague promise structure"]));
}

#[test]
fn test_apostrophe_optional_in_reason_pattern() {
    let found = identify_reasons("you wont believe it");
    assert_eq!(found, reasons(&["Uses \"you won't believe\" hook"]));
    // The scoring keyword requires the apostrophe.
    assert_eq!(calculate_score("you wont believe it"), 0);
}

#[test]
fn test_known_asymmetry_keyword_without_reason() {
    // UNBELIEVABLE scores but no reason pattern covers it.
    let card = HeuristicScorer::new().evaluate("Unbelievable results");
    assert_eq!(card.score, 15);
    assert_eq!(card.reasons, reasons(&[REASON_GENUINE]));
}

#[test]
fn test_known_asymmetry_reason_without_keyword() {
    // MUST SEE yields a reason but is not a scoring keyword; only "THIS" scores.
    let card = HeuristicScorer::new().evaluate("You must see this");
    assert_eq!(card.score, 5);
    assert_eq!(card.reasons, reasons(&["Urgency manipulation"]));
}

#[test]
fn test_reason_order_follows_pattern_list() {
    let found = identify_reasons("CRAZY STUNT GONE WRONG, MUST WATCH!!");
    assert_eq!(
        found,
        reasons(&[
            REASON_CAPS,
            REASON_PUNCTUATION,
            "Sensationalized language",
            "Clickbait format pattern",
            "Urgency manipulation",
        ])
    );
}

#[test]
fn test_confidence_is_fixed() {
    let card = HeuristicScorer::new().evaluate("anything");
    assert_eq!(card.confidence, crate::constants::HEURISTIC_CONFIDENCE);
}

#[test]
fn test_evaluate_is_deterministic() {
    let scorer = HeuristicScorer::new();
    let title = "INSANE trick!! what happens next??";
    assert_eq!(scorer.evaluate(title), scorer.evaluate(title));
}

#[test]
fn test_verdict_tier_boundaries() {
    assert_eq!(VerdictTier::from_score(100), VerdictTier::HighlyLikely);
    assert_eq!(VerdictTier::from_score(80), VerdictTier::HighlyLikely);
    assert_eq!(VerdictTier::from_score(79), VerdictTier::Likely);
    assert_eq!(VerdictTier::from_score(60), VerdictTier::Likely);
    assert_eq!(VerdictTier::from_score(59), VerdictTier::Moderate);
    assert_eq!(VerdictTier::from_score(40), VerdictTier::Moderate);
    assert_eq!(VerdictTier::from_score(39), VerdictTier::Minor);
    assert_eq!(VerdictTier::from_score(20), VerdictTier::Minor);
    assert_eq!(VerdictTier::from_score(19), VerdictTier::Genuine);
    assert_eq!(VerdictTier::from_score(0), VerdictTier::Genuine);
}

#[test]
fn test_verdict_tier_is_monotonic() {
    let mut previous = VerdictTier::from_score(0);
    for score in 1..=100u8 {
        let tier = VerdictTier::from_score(score);
        assert!(tier >= previous, "tier dropped at score {}", score);
        previous = tier;
    }
}

#[test]
fn test_verdict_messages_include_reasons_only_for_upper_tiers() {
    let r = reasons(&["a", "b"]);
    assert_eq!(
        generate_verdict(85, &r),
        "Highly likely clickbait. Proceed with caution. (a, b)"
    );
    assert_eq!(
        generate_verdict(65, &r),
        "Likely clickbait. Title may be misleading. (a, b)"
    );
    assert_eq!(
        generate_verdict(45, &r),
        "Moderate clickbait indicators detected. (a, b)"
    );
    assert_eq!(generate_verdict(25, &r), "Minor clickbait elements present.");
    assert_eq!(generate_verdict(5, &r), "Appears to be genuine content.");

    assert!(VerdictTier::Moderate.includes_reasons());
    assert!(!VerdictTier::Minor.includes_reasons());
}

#[test]
fn test_severity_classes() {
    assert_eq!(VerdictTier::HighlyLikely.severity_class(), "high");
    assert_eq!(VerdictTier::Likely.severity_class(), "medium-high");
    assert_eq!(VerdictTier::Moderate.severity_class(), "medium");
    assert_eq!(VerdictTier::Minor.severity_class(), "low");
    assert_eq!(VerdictTier::Genuine.severity_class(), "very-low");
}

#[test]
fn test_verdict_tier_display() {
    assert_eq!(format!("{}", VerdictTier::HighlyLikely), "HIGHLY_LIKELY");
    assert_eq!(format!("{}", VerdictTier::Genuine), "GENUINE");
}

#[test]
fn test_into_result_stamps_id_and_time() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let result = HeuristicScorer::new()
        .evaluate("NEW VIDEO IS LIVE")
        .into_result("v1", at);

    assert_eq!(result.id, "v1");
    assert_eq!(result.computed_at, at);
    assert_eq!(result.score, 30);
    assert_eq!(result.tier(), VerdictTier::Minor);
    assert!(result.exceeds_threshold(30));
    assert!(!result.exceeds_threshold(31));
}

#[test]
fn test_analysis_result_serializes_camel_case() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let result = HeuristicScorer::new().evaluate("").into_result("v1", at);
    let json = serde_json::to_value(&result).expect("should serialize");

    assert_eq!(json["id"], "v1");
    assert_eq!(json["score"], 0);
    assert!(json.get("computedAt").is_some());

    let back: AnalysisResult = serde_json::from_value(json).expect("should deserialize");
    assert_eq!(back, result);
}

#[tokio::test]
async fn test_heuristic_scorer_trait_never_fails() {
    let scorer = HeuristicScorer::new();
    assert_eq!(scorer.name(), "heuristic");
    let card = scorer.score("").await.expect("heuristic is total");
    assert_eq!(card.score, 0);
}

#[tokio::test]
async fn test_mock_scorer_counts_and_fails_on_demand() {
    let scorer = MockScorer::new();
    scorer.score("a").await.expect("should succeed");
    assert_eq!(scorer.calls(), 1);

    scorer.set_failing(true);
    let err = scorer.score("a").await.expect_err("should fail");
    assert!(matches!(err, ScoringError::ComputationFailed { .. }));
    assert_eq!(scorer.calls(), 2);
}
