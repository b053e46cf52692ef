use probity_core::errors::*;

#[test]
fn identical_pair_error_carries_id() {
    let err = ProbityError::IdenticalClaimPair {
        claim_id: "c-17".into(),
    };
    assert!(err.to_string().contains("c-17"));
}

#[test]
fn baseline_error_carries_key_and_value() {
    let err = BaselineError::NonPositiveStdDev {
        document_type: "police_report".into(),
        metric: "certainty_ratio".into(),
        std_dev: 0.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("police_report"));
    assert!(msg.contains("certainty_ratio"));
}

#[test]
fn config_error_converts_to_probity_error() {
    let err: ProbityError = ConfigError::ThresholdOutOfRange {
        name: "x".into(),
        value: 3.0,
    }
    .into();
    assert!(matches!(err, ProbityError::Config(_)));
    assert!(err.to_string().contains("x"));
}

#[test]
fn baseline_error_converts_to_probity_error() {
    let err: ProbityError = BaselineError::InsufficientSamples {
        needed: 2,
        actual: 1,
    }
    .into();
    assert!(matches!(err, ProbityError::Baseline(_)));
}

#[test]
fn similarity_error_converts_to_probity_error() {
    let err: ProbityError = SimilarityError::StrategyUnavailable {
        strategy: "embedding".into(),
    }
    .into();
    assert!(err.to_string().contains("embedding"));
}
