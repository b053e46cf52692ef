//! Test fixture loader for Probity golden datasets.
//!
//! Provides typed deserialization of the golden JSON files and helper
//! functions for loading them in tests across crates.

use probity_core::models::{Claim, ContradictionType, Severity};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// All JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// A claim set with the findings a detection run must produce.
#[derive(Debug, Deserialize)]
pub struct ContradictionGolden {
    pub description: String,
    pub case_id: String,
    pub claims: Vec<Claim>,
    pub expected: Vec<ExpectedContradiction>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedContradiction {
    pub claim_a_id: String,
    pub claim_b_id: String,
    pub contradiction_type: ContradictionType,
    pub severity: Severity,
    #[serde(default)]
    pub temporal_gap_days: Option<i64>,
}

/// A document with the bias signals its text must raise.
#[derive(Debug, Deserialize)]
pub struct BiasGolden {
    pub description: String,
    pub case_id: String,
    pub document_id: String,
    pub document_type: String,
    pub text: String,
    pub expected: Vec<ExpectedBiasSignal>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedBiasSignal {
    pub metric: String,
    pub observed_value: f64,
    pub z_score: f64,
    pub severity: Severity,
}

fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<(PathBuf, T)> {
    list_fixtures(subdir)
        .into_iter()
        .map(|path| {
            let relative = format!(
                "{subdir}/{}",
                path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
            );
            let golden = load_fixture(&relative);
            (path, golden)
        })
        .collect()
}

/// Load every contradiction golden case.
pub fn contradiction_goldens() -> Vec<(PathBuf, ContradictionGolden)> {
    load_all("golden/contradiction")
}

/// Load every bias golden document.
pub fn bias_goldens() -> Vec<(PathBuf, BiasGolden)> {
    load_all("golden/bias")
}

/// Build a claim quickly in tests.
pub fn claim(id: &str, document_id: &str, text: &str) -> Claim {
    Claim::new(id, "fixture-case", document_id, text)
}
