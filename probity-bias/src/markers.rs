//! Linguistic marker counting.
//!
//! Each category is one case-insensitive, word-bounded alternation,
//! compiled once per process.

use std::sync::LazyLock;

use probity_core::models::BiasMetric;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    HighCertainty,
    LowCertainty,
    NegativeSentiment,
    PositiveSentiment,
    ExtremeQuantifier,
    ModerateQuantifier,
}

impl MarkerCategory {
    pub const ALL: [MarkerCategory; 6] = [
        MarkerCategory::HighCertainty,
        MarkerCategory::LowCertainty,
        MarkerCategory::NegativeSentiment,
        MarkerCategory::PositiveSentiment,
        MarkerCategory::ExtremeQuantifier,
        MarkerCategory::ModerateQuantifier,
    ];

    pub fn markers(self) -> &'static [&'static str] {
        match self {
            MarkerCategory::HighCertainty => HIGH_CERTAINTY,
            MarkerCategory::LowCertainty => LOW_CERTAINTY,
            MarkerCategory::NegativeSentiment => NEGATIVE,
            MarkerCategory::PositiveSentiment => POSITIVE,
            MarkerCategory::ExtremeQuantifier => EXTREME,
            MarkerCategory::ModerateQuantifier => MODERATE,
        }
    }
}

const HIGH_CERTAINTY: &[&str] = &[
    "clearly", "obviously", "undoubtedly", "certainly", "definitely", "without doubt",
    "beyond doubt", "no doubt", "unquestionably", "evidently", "plainly", "conclusively",
    "it is clear", "must have", "proves", "demonstrates",
];

const LOW_CERTAINTY: &[&str] = &[
    "may", "might", "possibly", "perhaps", "appears", "seems", "suggests", "likely", "unlikely",
    "could", "unclear", "uncertain", "reportedly", "allegedly", "apparently", "it is possible",
];

const NEGATIVE: &[&str] = &[
    "hostile", "aggressive", "neglectful", "abusive", "manipulative", "dishonest",
    "uncooperative", "chaotic", "volatile", "unreliable", "evasive", "concerning", "worrying",
    "inappropriate", "failed", "refused", "poor", "dangerous", "harmful", "deceptive",
];

const POSITIVE: &[&str] = &[
    "cooperative", "caring", "warm", "loving", "reliable", "honest", "engaged", "appropriate",
    "consistent", "supportive", "attentive", "calm", "positive", "committed", "protective",
    "safe", "good", "open",
];

const EXTREME: &[&str] = &[
    "always", "never", "all", "none", "every", "everyone", "nobody", "nothing", "completely",
    "totally", "entirely", "absolutely", "constantly", "invariably", "at all times",
];

const MODERATE: &[&str] = &[
    "sometimes", "often", "occasionally", "some", "several", "many", "few", "usually",
    "frequently", "rarely", "generally", "partly", "at times", "on occasion",
];

fn compile(markers: &[&str]) -> Regex {
    let alternation = markers
        .iter()
        .map(|m| regex::escape(m).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
}

/// "May" written as a month: capitalised and next to a day or year
/// ("3 May", "May 2021").
fn is_month(text: &str, m: &regex::Match<'_>) -> bool {
    if m.as_str() != "May" {
        return false;
    }
    let before = text[..m.start()].trim_end();
    let after = &text[m.end()..];
    let day_before = before.len() < m.start() && before.ends_with(|c: char| c.is_ascii_digit());
    let digit_after = after.starts_with(char::is_whitespace)
        && after.trim_start().starts_with(|c: char| c.is_ascii_digit());
    day_before || digit_after
}

static PATTERNS: LazyLock<[(MarkerCategory, Regex); 6]> = LazyLock::new(|| {
    MarkerCategory::ALL.map(|category| (category, compile(category.markers())))
});

/// Marker totals for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerCounts {
    pub high_certainty: usize,
    pub low_certainty: usize,
    pub negative: usize,
    pub positive: usize,
    pub extreme: usize,
    pub moderate: usize,
}

impl MarkerCounts {
    fn slot(&mut self, category: MarkerCategory) -> &mut usize {
        match category {
            MarkerCategory::HighCertainty => &mut self.high_certainty,
            MarkerCategory::LowCertainty => &mut self.low_certainty,
            MarkerCategory::NegativeSentiment => &mut self.negative,
            MarkerCategory::PositiveSentiment => &mut self.positive,
            MarkerCategory::ExtremeQuantifier => &mut self.extreme,
            MarkerCategory::ModerateQuantifier => &mut self.moderate,
        }
    }

    /// Numerator and denominator of a metric.
    pub fn parts(&self, metric: BiasMetric) -> (usize, usize) {
        match metric {
            BiasMetric::CertaintyRatio => {
                (self.high_certainty, self.high_certainty + self.low_certainty)
            }
            BiasMetric::NegativeRatio => (self.negative, self.negative + self.positive),
            BiasMetric::ExtremeRatio => (self.extreme, self.extreme + self.moderate),
        }
    }

    /// `None` when neither side of the ratio occurs.
    pub fn ratio(&self, metric: BiasMetric) -> Option<f64> {
        let (numerator, denominator) = self.parts(metric);
        (denominator > 0).then(|| numerator as f64 / denominator as f64)
    }
}

/// Claim framing as judged by sentiment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BiasPatternMatcher;

impl BiasPatternMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn count(&self, text: &str) -> MarkerCounts {
        let mut counts = MarkerCounts::default();
        for (category, re) in PATTERNS.iter() {
            *counts.slot(*category) = re
                .find_iter(text)
                .filter(|m| *category != MarkerCategory::LowCertainty || !is_month(text, m))
                .count();
        }
        counts
    }

    /// Majority sentiment; `None` for neutral or evenly split text.
    pub fn sentiment(&self, text: &str) -> Option<Sentiment> {
        let counts = self.count(text);
        match counts.negative.cmp(&counts.positive) {
            std::cmp::Ordering::Greater => Some(Sentiment::Negative),
            std::cmp::Ordering::Less => Some(Sentiment::Positive),
            std::cmp::Ordering::Equal => None,
        }
    }
}
