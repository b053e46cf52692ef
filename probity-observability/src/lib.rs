//! # probity-observability
//!
//! Structured logging for the Probity engines: subscriber setup,
//! per-operation spans, and typed log events.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
