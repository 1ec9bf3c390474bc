//! Additive point-based title heuristic.
//!
//! Scoring and reason generation are two separate passes. The scoring keyword
//! list and the reason pattern list overlap but are not identical, so a title
//! can earn points that no reason mentions (e.g. `UNBELIEVABLE`) and vice versa
//! (e.g. `MUST SEE`).

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::error::ScoringError;
use super::scorer::Scorer;
use super::types::ScoreCard;
use super::verdict::generate_verdict;
use crate::constants::{
    CAPS_POINTS, CAPS_RATIO_LIMIT, HEURISTIC_CONFIDENCE, KEYWORD_POINTS, MAX_SCORE,
    PUNCTUATION_RUN_POINTS, VAGUE_WORD_POINTS,
};

/// Phrases matched against the uppercased title. Each distinct match scores once.
pub const CLICKBAIT_KEYWORDS: &[&str] = &[
    "YOU WON'T BELIEVE",
    "SHOCKING",
    "INSANE",
    "CRAZY",
    "UNBELIEVABLE",
    "MIND BLOWING",
    "GONE WRONG",
    "MUST WATCH",
    "WILL SHOCK YOU",
];

/// Vague-language words, matched as substrings of the uppercased title.
pub const VAGUE_WORDS: &[&str] = &["THIS", "WHAT", "WHY", "HOW", "SECRET", "TRICK"];

pub const REASON_CAPS: &str = "Excessive use of capital letters";
pub const REASON_PUNCTUATION: &str = "Excessive punctuation for emphasis";
pub const REASON_GENUINE: &str = "Title appears genuine";

static PUNCTUATION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("valid regex literal"));

static REASON_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)YOU WON'?T BELIEVE", "Uses \"you won't believe\" hook"),
        (r"(?i)SHOCKING|INSANE|CRAZY", "Sensationalized language"),
        (r"(?i)GONE WRONG|GONE SEXUAL", "Clickbait format pattern"),
        (r"(?i)MUST WATCH|MUST SEE", "Urgency manipulation"),
        (r"(?i)\bTHIS\b.*\bWILL\b", "Vague promise structure"),
    ]
    .into_iter()
    .map(|(pattern, reason)| (Regex::new(pattern).expect("valid regex literal"), reason))
    .collect()
});

/// Deterministic, side-effect-free clickbait heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores a title synchronously. Total over all strings.
    pub fn evaluate(&self, title: &str) -> ScoreCard {
        let score = calculate_score(title);
        let reasons = identify_reasons(title);
        let verdict = generate_verdict(score, &reasons);

        trace!(score, reasons = reasons.len(), "Heuristic title score");

        ScoreCard {
            score,
            verdict,
            reasons,
            confidence: HEURISTIC_CONFIDENCE,
        }
    }
}

impl Scorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn score(&self, title: &str) -> Result<ScoreCard, ScoringError> {
        Ok(self.evaluate(title))
    }
}

/// Ratio of ASCII uppercase letters to title length; `0.0` for an empty title.
///
/// Length is counted in UTF-16 code units, so a non-BMP character such as an
/// emoji weighs two.
pub fn caps_ratio(title: &str) -> f64 {
    let total = title.encode_utf16().count();
    if total == 0 {
        return 0.0;
    }
    let upper = title.chars().filter(char::is_ascii_uppercase).count();
    upper as f64 / total as f64
}

/// Number of non-overlapping runs of two or more `!`/`?`.
pub fn punctuation_runs(title: &str) -> usize {
    PUNCTUATION_RUN.find_iter(title).count()
}

/// Sums every check's contribution and clamps to `0..=100`.
pub fn calculate_score(title: &str) -> u8 {
    let upper = title.to_uppercase();
    let mut points: u32 = 0;

    if caps_ratio(title) > CAPS_RATIO_LIMIT {
        points += CAPS_POINTS;
    }

    let keyword_hits = CLICKBAIT_KEYWORDS
        .iter()
        .filter(|keyword| upper.contains(**keyword))
        .count() as u32;
    points += keyword_hits * KEYWORD_POINTS;

    let runs = punctuation_runs(title) as u32;
    points = points.saturating_add(runs.saturating_mul(PUNCTUATION_RUN_POINTS));

    let vague_hits = VAGUE_WORDS
        .iter()
        .filter(|word| upper.contains(**word))
        .count() as u32;
    points += vague_hits * VAGUE_WORD_POINTS;

    points.min(MAX_SCORE as u32) as u8
}

/// Reasons in fixed order; falls back to [`REASON_GENUINE`] so the list is never empty.
pub fn identify_reasons(title: &str) -> Vec<String> {
    let mut reasons = Vec::new();

    if caps_ratio(title) > CAPS_RATIO_LIMIT {
        reasons.push(REASON_CAPS.to_string());
    }

    if PUNCTUATION_RUN.is_match(title) {
        reasons.push(REASON_PUNCTUATION.to_string());
    }

    for (pattern, reason) in REASON_PATTERNS.iter() {
        if pattern.is_match(title) {
            reasons.push((*reason).to_string());
        }
    }

    if reasons.is_empty() {
        reasons.push(REASON_GENUINE.to_string());
    }

    reasons
}
