mod baseline;
mod bias_report;
mod bias_signal;
mod claim;
mod contradiction;
mod contradiction_report;
mod degradation_event;
mod severity;
mod similarity;

pub use baseline::{BaselineKey, BaselineProvenance, BaselineSnapshot, BiasBaseline, BiasMetric};
pub use bias_report::{BiasLevel, BiasReportSummary};
pub use bias_signal::{BiasSignal, BiasSignalType, Direction};
pub use claim::{Claim, ClaimType, Modality, Polarity};
pub use contradiction::{Contradiction, ContradictionType, DetectionMethod};
pub use contradiction_report::{ContradictionReport, ContradictionSummary, DocumentCount};
pub use degradation_event::DegradationEvent;
pub use severity::Severity;
pub use similarity::{Opposition, OppositionPath, SimilarityScore, SimilarityStrategyKind};
