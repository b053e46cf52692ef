use probity_bias::report::{bias_level, build_summary};
use probity_bias::stats::{self, ContingencyTable};
use probity_core::config::{BiasConfig, PValueMethod};
use probity_core::models::{
    BaselineSnapshot, BiasLevel, BiasSignal, BiasSignalType, Direction, Severity,
};
use proptest::prelude::*;

fn signal(id: usize, severity: Severity, z: f64) -> BiasSignal {
    BiasSignal {
        id: format!("s{id}"),
        case_id: "case".to_string(),
        document_id: Some(format!("doc-{}", id % 3)),
        entity_id: None,
        signal_type: BiasSignalType::CertaintyLanguage,
        metric: None,
        observed_value: 0.5,
        baseline: BaselineSnapshot {
            mean: 0.4,
            std_dev: 0.1,
            corpus_size: 10,
        },
        baseline_key: None,
        z_score: z,
        p_value: None,
        effect_size: None,
        sample_size: 10,
        direction: Direction::of(z),
        severity,
        description: String::new(),
        detected_at: chrono::Utc::now(),
    }
}

proptest! {
    #[test]
    fn severity_follows_abs_z(z in -6.0f64..6.0) {
        let config = BiasConfig::default();
        let severity = stats::severity_for(z.abs(), &config);
        prop_assert_eq!(severity.is_some(), z.abs() >= config.z_warning_threshold);
        if let Some(s) = severity {
            prop_assert_eq!(s == Severity::High, z.abs() >= config.z_critical_threshold);
        }
    }

    #[test]
    fn p_values_are_probabilities(z in -10.0f64..10.0) {
        for method in [PValueMethod::Exact, PValueMethod::Table] {
            if let Some(p) = stats::two_tailed_p(z, method) {
                prop_assert!((0.0..=1.0).contains(&p.value));
            }
        }
    }

    #[test]
    fn cramers_v_is_bounded(a in 0usize..40, b in 0usize..40, c in 0usize..40, d in 0usize..40) {
        let table = ContingencyTable { a, b, c, d };
        if let Some(chi2) = table.chi_square() {
            prop_assert!(chi2 >= 0.0);
            let v = stats::cramers_v(chi2, table.n());
            prop_assert!(v <= 1.0 + 1e-9);
        } else {
            prop_assert!(table.has_empty_marginal());
        }
    }

    #[test]
    fn summary_matches_direct_tally(severities in prop::collection::vec(0u8..3, 0..20)) {
        let signals: Vec<BiasSignal> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| match s {
                0 => signal(i, Severity::Low, 0.5),
                1 => signal(i, Severity::Medium, 1.7),
                _ => signal(i, Severity::High, 2.5),
            })
            .collect();
        let summary = build_summary(&signals, "case");
        prop_assert_eq!(summary.total_signals, signals.len());
        let counted: usize = summary.by_severity.values().sum();
        prop_assert_eq!(counted, signals.len());
        prop_assert_eq!(summary.level, bias_level(&signals));
        prop_assert_eq!(summary.level == BiasLevel::None, signals.is_empty());
    }
}
