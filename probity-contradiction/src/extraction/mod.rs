//! Surface-pattern extraction from claim text: dates, quantities,
//! reported speech and quotations.

pub mod dates;
pub mod quantities;
pub mod quotations;
pub mod reported_speech;
