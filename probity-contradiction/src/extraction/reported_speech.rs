//! Reported speech: who is said to have said what.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

const SAYING_VERBS: &str = r"(?:said|says|stated|states|told|reported|reports|claimed|claims|alleged|alleges|explained|disclosed|confirmed|admitted|denied|described|informed|indicated|asserted|recalled)";

const ROLES: &str = r"(?:mother|father|grandmother|grandfather|child|son|daughter|parent|social worker|teacher|head teacher|doctor|gp|nurse|health visitor|officer|police|witness|applicant|respondent|guardian|neighbour|neighbor|partner|he|she|they)";

/// "[The] Speaker said [that] content"
static SPEECH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:\b[Tt]he\s+)?\b((?-i:[A-Z][\w'-]+(?:\s+[A-Z][\w'-]+){{0,2}})|(?i:{ROLES}))\s+(?i:{SAYING_VERBS})\b(?:\s+(?i:that)\b)?\s*([^.;]*)"
    ))
    .unwrap()
});

/// "According to [the] Speaker, content"
static ACCORDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\baccording\s+to\s+(?:the\s+)?((?-i:[A-Z][\w'-]+(?:\s+[A-Z][\w'-]+){{0,2}})|{ROLES})\s*,\s*([^.;]*)"
    ))
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedSpeech {
    /// Lowercased speaker, without a leading article.
    pub speaker: String,
    pub content: String,
}

fn normalize_speaker(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    lower
        .strip_prefix("the ")
        .map(str::to_string)
        .unwrap_or(lower)
}

pub fn extract(text: &str) -> Vec<ReportedSpeech> {
    let mut found = Vec::new();
    for re in [&*SPEECH_RE, &*ACCORDING_RE] {
        for caps in re.captures_iter(text) {
            let speaker = normalize_speaker(&caps[1]);
            // A sentence-initial article is not a name.
            if speaker.is_empty() || speaker == "the" {
                continue;
            }
            found.push(ReportedSpeech {
                speaker,
                content: caps[2].trim().to_string(),
            });
        }
    }
    found
}

/// Distinct speakers reported in `text`.
pub fn speakers(text: &str) -> BTreeSet<String> {
    extract(text).into_iter().map(|s| s.speaker).collect()
}
