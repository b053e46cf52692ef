//! # probity-contradiction
//!
//! Finds inconsistencies between the claims of a case.
//!
//! A run builds a [`ClaimIndex`](index::ClaimIndex) once, then hands it to
//! eight independent pairwise classifiers (self, modality shift, temporal,
//! value, attribution, direct, quotation, omission). The
//! [`aggregator`] merges their output into one deduplicated, ordered
//! [`ContradictionReport`](probity_core::ContradictionReport).

pub mod aggregator;
pub mod detection;
pub mod engine;
pub mod extraction;
pub mod index;

pub use engine::ContradictionEngine;
