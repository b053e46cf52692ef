//! Calendar date extraction and claim date ranges.

use std::sync::LazyLock;

use chrono::NaiveDate;
use probity_core::models::Claim;
use regex::Regex;

const MONTHS: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// 2021-03-03
static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());

/// 03/03/2021, day first.
static DMY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

/// 3 March 2021, 3rd Mar 2021
static DAY_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+{MONTHS}\.?,?\s+(\d{{4}})\b"
    ))
    .unwrap()
});

/// March 3, 2021
static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{MONTHS}\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
    ))
    .unwrap()
});

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let n = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

fn ymd(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// The earliest-positioned valid date in `text`, in any supported format.
pub fn parse_first_date(text: &str) -> Option<NaiveDate> {
    let mut found: Vec<(usize, NaiveDate)> = Vec::new();

    for caps in ISO_RE.captures_iter(text) {
        if let Some(d) = caps[2]
            .parse()
            .ok()
            .and_then(|m| ymd(&caps[1], m, &caps[3]))
        {
            found.push((caps.get(0).map_or(0, |m| m.start()), d));
        }
    }
    for caps in DMY_RE.captures_iter(text) {
        if let Some(d) = caps[2]
            .parse()
            .ok()
            .and_then(|m| ymd(&caps[3], m, &caps[1]))
        {
            found.push((caps.get(0).map_or(0, |m| m.start()), d));
        }
    }
    for caps in DAY_MONTH_RE.captures_iter(text) {
        if let Some(d) = month_number(&caps[2]).and_then(|m| ymd(&caps[3], m, &caps[1])) {
            found.push((caps.get(0).map_or(0, |m| m.start()), d));
        }
    }
    for caps in MONTH_DAY_RE.captures_iter(text) {
        if let Some(d) = month_number(&caps[1]).and_then(|m| ymd(&caps[3], m, &caps[2])) {
            found.push((caps.get(0).map_or(0, |m| m.start()), d));
        }
    }

    found.into_iter().min_by_key(|(pos, _)| *pos).map(|(_, d)| d)
}

/// Inclusive date range a claim refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Days between the nearest ends of two disjoint ranges; 0 if they overlap.
    pub fn gap_days(&self, other: &DateRange) -> i64 {
        if self.overlaps(other) {
            0
        } else if self.end < other.start {
            (other.start - self.end).num_days()
        } else {
            (self.start - other.end).num_days()
        }
    }
}

/// Resolve a claim's dates: the structured start date wins, otherwise the
/// first date found in the time expression. An end date before the start
/// is ignored.
pub fn resolve_range(claim: &Claim) -> Option<DateRange> {
    let start = claim.start_date.or_else(|| {
        claim
            .time_expression
            .as_deref()
            .and_then(parse_first_date)
    })?;
    let end = claim.end_date.filter(|e| *e >= start).unwrap_or(start);
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_all_formats() {
        assert_eq!(parse_first_date("on 2021-03-03"), Some(d(2021, 3, 3)));
        assert_eq!(parse_first_date("on 04/05/2020"), Some(d(2020, 5, 4)));
        assert_eq!(parse_first_date("on 3 March 2021"), Some(d(2021, 3, 3)));
        assert_eq!(parse_first_date("on 21st Sept 2019"), Some(d(2019, 9, 21)));
        assert_eq!(parse_first_date("on March 3, 2021"), Some(d(2021, 3, 3)));
    }

    #[test]
    fn earliest_mention_wins() {
        assert_eq!(
            parse_first_date("between 1 June 2020 and 2019-01-01"),
            Some(d(2020, 6, 1))
        );
    }

    #[test]
    fn invalid_dates_are_ignored() {
        assert_eq!(parse_first_date("on 31/02/2021"), None);
        assert_eq!(parse_first_date("last summer"), None);
    }

    #[test]
    fn start_date_preferred_over_expression() {
        let claim = Claim::new("c1", "case", "doc", "text")
            .with_time_expression("3 March 2021")
            .with_start_date(d(2020, 1, 1));
        assert_eq!(resolve_range(&claim).map(|r| r.start), Some(d(2020, 1, 1)));
    }

    #[test]
    fn gap_between_disjoint_ranges() {
        let a = DateRange { start: d(2021, 1, 1), end: d(2021, 1, 31) };
        let b = DateRange { start: d(2021, 3, 2), end: d(2021, 3, 2) };
        assert_eq!(a.gap_days(&b), 30);
        assert_eq!(b.gap_days(&a), 30);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlapping_ranges_have_no_gap() {
        let a = DateRange { start: d(2021, 1, 1), end: d(2021, 6, 30) };
        let b = DateRange { start: d(2021, 3, 1), end: d(2021, 3, 1) };
        assert!(a.overlaps(&b));
        assert_eq!(a.gap_days(&b), 0);
    }
}
