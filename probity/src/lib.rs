//! # probity
//!
//! One entry point over the Probity engines. [`Probity`] owns the
//! similarity estimator, the contradiction engine, the bias engine and the
//! baseline store, all built from one validated [`ProbityConfig`].

pub mod runtime;

pub use probity_core::config::ProbityConfig;
pub use probity_core::errors::{ProbityError, ProbityResult};
pub use probity_core::models;
pub use probity_core::traits;
pub use probity_observability::init_tracing;
pub use runtime::{Probity, ProbityOptions};
