use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::BaselineError;

/// Linguistic ratio measured in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasMetric {
    /// high-certainty / (high + low certainty) markers.
    CertaintyRatio,
    /// negative / (negative + positive) sentiment markers.
    NegativeRatio,
    /// extreme / (extreme + moderate) quantifiers.
    ExtremeRatio,
}

impl BiasMetric {
    pub const ALL: [BiasMetric; 3] = [
        BiasMetric::CertaintyRatio,
        BiasMetric::NegativeRatio,
        BiasMetric::ExtremeRatio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BiasMetric::CertaintyRatio => "certainty_ratio",
            BiasMetric::NegativeRatio => "negative_ratio",
            BiasMetric::ExtremeRatio => "extreme_ratio",
        }
    }
}

impl fmt::Display for BiasMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a baseline's figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineProvenance {
    Empirical,
    Estimated,
    Calibrated,
}

/// Unique key of a baseline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BaselineKey {
    pub document_type: String,
    pub metric: BiasMetric,
}

impl BaselineKey {
    pub fn new(document_type: impl Into<String>, metric: BiasMetric) -> Self {
        Self {
            document_type: document_type.into(),
            metric,
        }
    }
}

impl fmt::Display for BaselineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.document_type, self.metric)
    }
}

/// The figures of a baseline at the moment it was used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    pub mean: f64,
    pub std_dev: f64,
    pub corpus_size: u32,
}

/// Reference statistics for one (document type, metric).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasBaseline {
    pub document_type: String,
    pub metric: BiasMetric,
    pub mean: f64,
    pub std_dev: f64,
    pub corpus_size: u32,
    pub provenance: BaselineProvenance,
    pub updated_at: DateTime<Utc>,
}

impl BiasBaseline {
    pub fn new(
        document_type: impl Into<String>,
        metric: BiasMetric,
        mean: f64,
        std_dev: f64,
        corpus_size: u32,
        provenance: BaselineProvenance,
    ) -> Result<Self, BaselineError> {
        let baseline = Self {
            document_type: document_type.into(),
            metric,
            mean,
            std_dev,
            corpus_size,
            provenance,
            updated_at: Utc::now(),
        };
        baseline.validate()?;
        Ok(baseline)
    }

    /// Deserialized baselines bypass `new`; stores call this on upsert.
    pub fn validate(&self) -> Result<(), BaselineError> {
        if !self.mean.is_finite() {
            return Err(BaselineError::InvalidMean {
                document_type: self.document_type.clone(),
                metric: self.metric.to_string(),
                mean: self.mean,
            });
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(BaselineError::NonPositiveStdDev {
                document_type: self.document_type.clone(),
                metric: self.metric.to_string(),
                std_dev: self.std_dev,
            });
        }
        if self.corpus_size == 0 {
            return Err(BaselineError::EmptyCorpus {
                document_type: self.document_type.clone(),
                metric: self.metric.to_string(),
            });
        }
        Ok(())
    }

    pub fn key(&self) -> BaselineKey {
        BaselineKey::new(self.document_type.clone(), self.metric)
    }

    pub fn snapshot(&self) -> BaselineSnapshot {
        BaselineSnapshot {
            mean: self.mean,
            std_dev: self.std_dev,
            corpus_size: self.corpus_size,
        }
    }
}
