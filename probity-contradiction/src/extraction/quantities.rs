//! Counted quantities: "6 occasions", "three visits", "2.5 hours".

use std::sync::LazyLock;

use regex::Regex;

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+(?:\.\d+)?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty)\s+(occasions?|times?|incidents?|visits?|sessions?|days?|weeks?|months?|years?|hours?|minutes?)\b",
    )
    .unwrap()
});

const NUMBER_WORDS: [&str; 20] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

/// A number with its unit, unit normalized to the plural form.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

fn parse_number(raw: &str) -> Option<f64> {
    let lower = raw.to_lowercase();
    if let Some(pos) = NUMBER_WORDS.iter().position(|w| *w == lower) {
        return Some((pos + 1) as f64);
    }
    lower.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn plural_unit(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.ends_with('s') {
        lower
    } else {
        format!("{lower}s")
    }
}

/// All quantities in order of appearance.
pub fn extract(text: &str) -> Vec<Quantity> {
    QUANTITY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Quantity {
                value: parse_number(&caps[1])?,
                unit: plural_unit(&caps[2]),
            })
        })
        .collect()
}

/// `|a - b| / max(a, b)`; zero when both are zero or the ratio is not
/// finite.
pub fn relative_difference(a: f64, b: f64) -> f64 {
    let larger = a.abs().max(b.abs());
    if larger == 0.0 {
        return 0.0;
    }
    let diff = (a - b).abs() / larger;
    if diff.is_finite() {
        diff
    } else {
        0.0
    }
}
