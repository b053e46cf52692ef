//! BiasEngine: document z-score analysis, entity attribution, reports,
//! and baseline calibration behind one validated configuration.

use std::sync::Arc;

use probity_core::config::BiasConfig;
use probity_core::errors::ProbityResult;
use probity_core::models::{BiasReportSummary, BiasSignal, Claim};
use probity_core::traits::IBaselineStore;
use probity_observability::{attribution_span, bias_span, calibration_span, events};

use crate::attribution::EntityAttributionAnalyzer;
use crate::baseline::calibration;
use crate::report;
use crate::zscore::ZScoreAnalyzer;

pub struct BiasEngine {
    config: BiasConfig,
    store: Arc<dyn IBaselineStore>,
}

impl BiasEngine {
    pub fn new(config: BiasConfig, store: Arc<dyn IBaselineStore>) -> ProbityResult<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn IBaselineStore> {
        &self.store
    }

    /// Marker ratios of one document against its document type's baseline.
    pub fn analyse_document_bias(
        &self,
        document_id: &str,
        document_type: &str,
        text: &str,
        case_id: &str,
    ) -> ProbityResult<Vec<BiasSignal>> {
        let span = bias_span!(document_id, document_type);
        let _guard = span.enter();

        let signals = ZScoreAnalyzer::new(&self.config).analyse(
            self.store.as_ref(),
            document_id,
            document_type,
            text,
            case_id,
        );
        for signal in &signals {
            events::bias_signal_emitted(signal);
        }
        Ok(signals)
    }

    /// Negative framing of one entity relative to all other subjects.
    pub fn analyse_entity_attribution(
        &self,
        claims: &[Claim],
        entity_id: &str,
        case_id: &str,
    ) -> ProbityResult<Option<BiasSignal>> {
        let span = attribution_span!(entity_id, claims.len());
        let _guard = span.enter();

        for claim in claims {
            claim.validate()?;
        }

        let signal = EntityAttributionAnalyzer::new(&self.config).analyse(claims, entity_id, case_id);
        if let Some(s) = &signal {
            events::bias_signal_emitted(s);
        }
        Ok(signal)
    }

    pub fn generate_bias_report(&self, signals: &[BiasSignal], case_id: &str) -> BiasReportSummary {
        report::build_summary(signals, case_id)
    }

    /// Calibrate every measurable metric from a corpus and store the
    /// results. Returns the number of baselines written.
    pub fn calibrate(&self, document_type: &str, documents: &[&str]) -> ProbityResult<usize> {
        let span = calibration_span!(document_type, "all");
        let _guard = span.enter();

        let baselines = calibration::calibrate_from_documents(document_type, documents)?;
        let written = baselines.len();
        for baseline in baselines {
            self.store.upsert_baseline(baseline)?;
        }
        Ok(written)
    }
}
