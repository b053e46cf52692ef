//! Document z-score signals, entity attribution, and report levels.

use std::sync::Arc;

use probity_bias::attribution::EntityAttributionAnalyzer;
use probity_bias::stats::{self, ContingencyTable};
use probity_bias::{BiasEngine, InMemoryBaselineStore};
use probity_core::config::{BiasConfig, PValueMethod};
use probity_core::models::{
    BaselineProvenance, BiasBaseline, BiasLevel, BiasMetric, BiasSignalType, Claim, Direction,
    Severity,
};
use probity_core::traits::IBaselineStore;

fn store_with(document_type: &str, metric: BiasMetric, mean: f64, std_dev: f64) -> Arc<InMemoryBaselineStore> {
    let store = InMemoryBaselineStore::new();
    store
        .upsert_baseline(
            BiasBaseline::new(document_type, metric, mean, std_dev, 40, BaselineProvenance::Empirical)
                .unwrap(),
        )
        .unwrap();
    Arc::new(store)
}

fn engine(store: Arc<InMemoryBaselineStore>) -> BiasEngine {
    BiasEngine::new(BiasConfig::default(), store).unwrap()
}

// 7 high-certainty markers, 3 low-certainty markers: ratio 0.70.
const CERTAIN_TEXT: &str = "Clearly he lied. Obviously he knew. Certainly it happened. \
    Definitely late. Undoubtedly true. Evidently so. Plainly wrong. \
    It may be. It might be. Perhaps.";

// --- Document z-score ---

#[test]
fn z_of_exactly_two_is_high() {
    let engine = engine(store_with("expert_report", BiasMetric::CertaintyRatio, 0.40, 0.15));
    let signals = engine
        .analyse_document_bias("doc-1", "expert_report", CERTAIN_TEXT, "case-1")
        .unwrap();

    assert_eq!(signals.len(), 1);
    let s = &signals[0];
    assert_eq!(s.signal_type, BiasSignalType::CertaintyLanguage);
    assert_eq!(s.metric, Some(BiasMetric::CertaintyRatio));
    assert!((s.observed_value - 0.70).abs() < 1e-12);
    assert_eq!(s.z_score, 2.0);
    assert_eq!(s.severity, Severity::High);
    assert_eq!(s.direction, Direction::Higher);
    assert_eq!(s.sample_size, 10);
    assert_eq!(s.document_id.as_deref(), Some("doc-1"));
    assert_eq!(s.baseline.mean, 0.40);
    let p = s.p_value.unwrap();
    assert!((p - 0.0455).abs() < 1e-3, "got {p}");
}

#[test]
fn below_warning_threshold_is_silent() {
    let engine = engine(store_with("expert_report", BiasMetric::CertaintyRatio, 0.60, 0.15));
    let signals = engine
        .analyse_document_bias("doc-1", "expert_report", CERTAIN_TEXT, "case-1")
        .unwrap();
    assert!(signals.is_empty());
}

#[test]
fn warning_band_is_medium() {
    // (0.70 - 0.475) / 0.15 = 1.5
    let engine = engine(store_with("expert_report", BiasMetric::CertaintyRatio, 0.475, 0.15));
    let signals = engine
        .analyse_document_bias("doc-1", "expert_report", CERTAIN_TEXT, "case-1")
        .unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].z_score, 1.5);
    assert_eq!(signals[0].severity, Severity::Medium);
}

#[test]
fn lower_than_baseline_is_flagged_with_direction() {
    let engine = engine(store_with("expert_report", BiasMetric::CertaintyRatio, 0.40, 0.15));
    let text = "It may be. It might be. Perhaps. Possibly.";
    let signals = engine
        .analyse_document_bias("doc-1", "expert_report", text, "case-1")
        .unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].direction, Direction::Lower);
    assert!(signals[0].z_score < 0.0);
}

#[test]
fn unknown_document_type_falls_back_to_general() {
    let engine = engine(store_with("general", BiasMetric::CertaintyRatio, 0.40, 0.15));
    let signals = engine
        .analyse_document_bias("doc-1", "tribunal_transcript", CERTAIN_TEXT, "case-1")
        .unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(
        signals[0].baseline_key.as_ref().map(|k| k.document_type.as_str()),
        Some("general")
    );
}

#[test]
fn no_fallback_configured_skips_metric() {
    let config = BiasConfig {
        fallback_document_type: None,
        ..BiasConfig::default()
    };
    let engine = BiasEngine::new(
        config,
        store_with("general", BiasMetric::CertaintyRatio, 0.40, 0.15),
    )
    .unwrap();
    let signals = engine
        .analyse_document_bias("doc-1", "tribunal_transcript", CERTAIN_TEXT, "case-1")
        .unwrap();
    assert!(signals.is_empty());
}

#[test]
fn text_without_markers_yields_nothing() {
    let engine = engine(Arc::new(InMemoryBaselineStore::with_defaults()));
    let signals = engine
        .analyse_document_bias("doc-1", "police_report", "The hearing was on Monday.", "case-1")
        .unwrap();
    assert!(signals.is_empty());
}

#[test]
fn table_method_reports_bucketed_p_value() {
    let config = BiasConfig {
        p_value_method: PValueMethod::Table,
        ..BiasConfig::default()
    };
    let engine = BiasEngine::new(
        config,
        store_with("expert_report", BiasMetric::CertaintyRatio, 0.40, 0.15),
    )
    .unwrap();
    let signals = engine
        .analyse_document_bias("doc-1", "expert_report", CERTAIN_TEXT, "case-1")
        .unwrap();
    assert_eq!(signals[0].p_value, Some(0.05));
}

#[test]
fn invalid_config_is_rejected() {
    let config = BiasConfig {
        z_warning_threshold: 3.0,
        z_critical_threshold: 2.0,
        ..BiasConfig::default()
    };
    assert!(BiasEngine::new(config, Arc::new(InMemoryBaselineStore::new())).is_err());
}

// --- Entity attribution ---

fn about(id: &str, entity: &str, text: &str) -> Claim {
    Claim::new(id, "case-1", "doc-1", text).about(entity)
}

fn skewed_claims() -> Vec<Claim> {
    let mut claims = Vec::new();
    for i in 0..6 {
        claims.push(about(&format!("f{i}"), "father", "The father was hostile and evasive"));
    }
    claims.push(about("f6", "father", "The father was calm"));
    claims.push(about("m0", "mother", "The mother was aggressive"));
    for i in 1..6 {
        claims.push(about(&format!("m{i}"), "mother", "The mother was warm and caring"));
    }
    claims.push(about("x0", "father", "The father arrived at ten"));
    claims
}

#[test]
fn skewed_framing_is_flagged() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    let signal = engine
        .analyse_entity_attribution(&skewed_claims(), "father", "case-1")
        .unwrap()
        .expect("signal");

    // a=6 b=1 c=1 d=5, neutral claim excluded
    let chi2: f64 = 13.0 * 29.0 * 29.0 / (7.0 * 6.0 * 7.0 * 6.0);
    assert_eq!(signal.signal_type, BiasSignalType::AttributionAsymmetry);
    assert_eq!(signal.entity_id.as_deref(), Some("father"));
    assert_eq!(signal.sample_size, 13);
    assert!((signal.z_score - chi2.sqrt()).abs() < 1e-8);
    assert_eq!(signal.direction, Direction::Higher);
    assert_eq!(signal.severity, Severity::High);
    assert!((signal.observed_value - 6.0 / 7.0).abs() < 1e-12);
    assert!((signal.baseline.mean - 1.0 / 6.0).abs() < 1e-12);
    assert!((signal.effect_size.unwrap() - (chi2 / 13.0).sqrt()).abs() < 1e-12);
    assert!(signal.p_value.unwrap() < 0.05);
    assert!(signal.baseline_key.is_none());
}

#[test]
fn favourable_framing_has_negative_z() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    let signal = engine
        .analyse_entity_attribution(&skewed_claims(), "mother", "case-1")
        .unwrap()
        .expect("signal");
    assert_eq!(signal.direction, Direction::Lower);
    assert!(signal.z_score < 0.0);
}

fn one_sided_claims(father: usize, mother: usize) -> Vec<Claim> {
    let mut claims = Vec::new();
    for i in 0..father {
        claims.push(about(&format!("f{i}"), "father", "The father was hostile"));
    }
    for i in 0..mother {
        claims.push(about(&format!("m{i}"), "mother", "The mother was warm"));
    }
    claims
}

#[test]
fn small_sample_is_suppressed() {
    let config = BiasConfig::default();
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));

    // a=5 b=0 c=0 d=4: chi-square 9, significant but below the minimum n
    let claims = one_sided_claims(5, 4);
    let table = EntityAttributionAnalyzer::new(&config).table(&claims, "father");
    assert_eq!(table, ContingencyTable { a: 5, b: 0, c: 0, d: 4 });
    let chi2 = table.chi_square().unwrap();
    assert!((chi2 - 9.0).abs() < 1e-9);
    let p = stats::chi_square_p(chi2, PValueMethod::Exact).unwrap();
    assert!(p.value < 0.05);
    assert!(engine
        .analyse_entity_attribution(&claims, "father", "case-1")
        .unwrap()
        .is_none());

    // one more claim reaches the minimum sample size
    let claims = one_sided_claims(6, 4);
    assert_eq!(claims.len(), config.min_sample_size);
    let signal = engine
        .analyse_entity_attribution(&claims, "father", "case-1")
        .unwrap()
        .expect("signal at minimum sample size");
    assert_eq!(signal.signal_type, BiasSignalType::AttributionAsymmetry);
}

#[test]
fn balanced_framing_is_not_flagged() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    let mut claims = Vec::new();
    for i in 0..5 {
        claims.push(about(&format!("f{i}"), "father", "He was hostile"));
        claims.push(about(&format!("g{i}"), "father", "He was warm"));
        claims.push(about(&format!("m{i}"), "mother", "She was hostile"));
        claims.push(about(&format!("n{i}"), "mother", "She was warm"));
    }
    assert!(engine
        .analyse_entity_attribution(&claims, "father", "case-1")
        .unwrap()
        .is_none());
}

#[test]
fn entity_absent_from_claims_has_empty_marginal() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    assert!(engine
        .analyse_entity_attribution(&skewed_claims(), "grandmother", "case-1")
        .unwrap()
        .is_none());
}

#[test]
fn invalid_claim_is_rejected() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    let claims = vec![about(" ", "father", "He was hostile")];
    assert!(engine
        .analyse_entity_attribution(&claims, "father", "case-1")
        .is_err());
}

// --- Report ---

#[test]
fn report_levels_and_summary() {
    let engine = engine(store_with("expert_report", BiasMetric::CertaintyRatio, 0.40, 0.15));
    let mut signals = engine
        .analyse_document_bias("doc-1", "expert_report", CERTAIN_TEXT, "case-1")
        .unwrap();

    let one_high = engine.generate_bias_report(&signals, "case-1");
    assert_eq!(one_high.level, BiasLevel::Moderate);
    assert_eq!(one_high.documents_flagged, vec!["doc-1".to_string()]);

    let attribution = engine
        .analyse_entity_attribution(&skewed_claims(), "father", "case-1")
        .unwrap()
        .unwrap();
    let strongest_id = attribution.id.clone();
    signals.push(attribution);

    let summary = engine.generate_bias_report(&signals, "case-1");
    assert_eq!(summary.level, BiasLevel::High);
    assert_eq!(summary.total_signals, 2);
    assert_eq!(summary.by_severity.get(&Severity::High), Some(&2));
    assert_eq!(summary.entities_flagged, vec!["father".to_string()]);
    assert_eq!(summary.strongest_signal_id, Some(strongest_id));
    assert!(summary.max_abs_z_score.unwrap() > 2.0);
}

#[test]
fn empty_report_is_none() {
    let engine = engine(Arc::new(InMemoryBaselineStore::new()));
    let summary = engine.generate_bias_report(&[], "case-1");
    assert_eq!(summary.level, BiasLevel::None);
    assert_eq!(summary.max_abs_z_score, None);
    assert!(summary.by_type.is_empty());
}

// --- Calibration ---

#[test]
fn calibration_writes_to_store() {
    let store = Arc::new(InMemoryBaselineStore::new());
    let engine = engine(store.clone());
    let docs = [
        "He was clearly hostile. It may be so.",
        "She was possibly hostile but warm.",
        "Obviously and certainly he was caring. Perhaps.",
    ];
    let written = engine.calibrate("police_report", &docs).unwrap();
    assert_eq!(written, 2);
    let baseline = store
        .get_baseline("police_report", BiasMetric::CertaintyRatio)
        .unwrap();
    assert_eq!(baseline.provenance, BaselineProvenance::Calibrated);
    assert_eq!(baseline.corpus_size, 3);
}
