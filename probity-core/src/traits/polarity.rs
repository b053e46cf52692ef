use crate::models::Opposition;

/// Decides whether two texts assert opposite polarity about the same
/// predicate.
pub trait IPolarityDetector: Send + Sync {
    fn opposition(&self, a: &str, b: &str) -> Opposition;
}
