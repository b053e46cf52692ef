//! # probity-core
//!
//! Foundation crate for the Probity analysis engines.
//! Defines the claim/contradiction/bias data model, the seams between
//! engines (traits), errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ProbityConfig;
pub use errors::{ProbityError, ProbityResult};
pub use models::{Claim, Contradiction, ContradictionReport, ContradictionType, Severity};
