use probity_core::config::SimilarityConfig;
use probity_core::models::OppositionPath;
use probity_core::traits::IPolarityDetector;
use probity_similarity::PolarityDetector;

fn detector() -> PolarityDetector {
    PolarityDetector::new(&SimilarityConfig::default())
}

#[test]
fn explicit_negation_scores_point_nine() {
    let o = detector().opposition(
        "The mother attended the child protection conference",
        "The mother did not attend the child protection conference",
    );
    assert!(o.is_opposite);
    assert_eq!(o.confidence, 0.9);
    assert_eq!(o.path, Some(OppositionPath::ExplicitNegation));
}

#[test]
fn curated_opposite_scores_point_eight_five() {
    let o = detector().opposition(
        "The father cooperated with officers",
        "The father refused to cooperate with officers",
    );
    assert!(o.is_opposite);
    assert_eq!(o.confidence, 0.85);
    assert_eq!(o.path, Some(OppositionPath::Antonym));
}

#[test]
fn never_counts_as_negation() {
    let o = detector().opposition(
        "She has visited the property",
        "She has never visited the property",
    );
    assert_eq!(o.path, Some(OppositionPath::ExplicitNegation));
}

#[test]
fn unrelated_statements_are_not_opposed() {
    let o = detector().opposition(
        "The house was clean and tidy",
        "The school reported good attendance",
    );
    assert!(!o.is_opposite);
    assert_eq!(o.confidence, 0.0);
    assert_eq!(o.path, None);
}

#[test]
fn opposition_is_symmetric() {
    let d = detector();
    let a = "The child was safe at home";
    let b = "The child was unsafe at home";
    assert_eq!(d.opposition(a, b), d.opposition(b, a));
}
