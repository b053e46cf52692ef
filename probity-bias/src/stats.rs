//! Z-scores, two-tailed p-values, and the 2x2 chi-square test.
//!
//! Exact p-values come from `statrs` distributions. The critical-value
//! table is used when configured, or when the exact path is not finite.

use probity_core::config::{BiasConfig, PValueMethod};
use probity_core::constants::{
    CHI2_CRITICAL_P01, CHI2_CRITICAL_P05, CHI2_CRITICAL_P10, Z_CRITICAL_P01, Z_CRITICAL_P05,
    Z_CRITICAL_P10, Z_SCORE_PRECISION,
};
use probity_core::models::Severity;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// A p-value and how it was obtained. Table values are upper bounds,
/// so they meet a significance level they equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PValue {
    pub value: f64,
    pub exact: bool,
}

impl PValue {
    pub fn is_below(&self, significance_level: f64) -> bool {
        if self.exact {
            self.value < significance_level
        } else {
            self.value <= significance_level
        }
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `(observed - mean) / std_dev`, rounded so that boundary values compare
/// exactly against thresholds.
pub fn z_score(observed: f64, mean: f64, std_dev: f64) -> f64 {
    round_to((observed - mean) / std_dev, Z_SCORE_PRECISION)
}

/// Two-tailed p-value of a standard normal z. `None` when the table is
/// used and |z| is below its smallest critical value.
pub fn two_tailed_p(z: f64, method: PValueMethod) -> Option<PValue> {
    if method == PValueMethod::Exact {
        if let Ok(normal) = Normal::new(0.0, 1.0) {
            let p = 2.0 * (1.0 - normal.cdf(z.abs()));
            if p.is_finite() {
                return Some(PValue {
                    value: p.clamp(0.0, 1.0),
                    exact: true,
                });
            }
        }
    }
    z_table(z.abs())
}

fn z_table(abs_z: f64) -> Option<PValue> {
    let value = if abs_z >= Z_CRITICAL_P01 {
        0.01
    } else if abs_z >= Z_CRITICAL_P05 {
        0.05
    } else if abs_z >= Z_CRITICAL_P10 {
        0.10
    } else {
        return None;
    };
    Some(PValue {
        value,
        exact: false,
    })
}

/// Upper-tail p-value of a 1-df chi-square statistic.
pub fn chi_square_p(chi2: f64, method: PValueMethod) -> Option<PValue> {
    if method == PValueMethod::Exact {
        if let Ok(dist) = ChiSquared::new(1.0) {
            let p = 1.0 - dist.cdf(chi2);
            if p.is_finite() {
                return Some(PValue {
                    value: p.clamp(0.0, 1.0),
                    exact: true,
                });
            }
        }
    }
    chi_square_table(chi2)
}

fn chi_square_table(chi2: f64) -> Option<PValue> {
    let value = if chi2 >= CHI2_CRITICAL_P01 {
        0.01
    } else if chi2 >= CHI2_CRITICAL_P05 {
        0.05
    } else if chi2 >= CHI2_CRITICAL_P10 {
        0.10
    } else {
        return None;
    };
    Some(PValue {
        value,
        exact: false,
    })
}

/// ```text
///              negative  positive
/// target          a         b
/// others          c         d
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContingencyTable {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl ContingencyTable {
    pub fn n(&self) -> usize {
        self.a + self.b + self.c + self.d
    }

    pub fn has_empty_marginal(&self) -> bool {
        self.a + self.b == 0 || self.c + self.d == 0 || self.a + self.c == 0 || self.b + self.d == 0
    }

    /// Pearson chi-square without continuity correction.
    /// `None` when a marginal is empty.
    pub fn chi_square(&self) -> Option<f64> {
        if self.has_empty_marginal() {
            return None;
        }
        let (a, b, c, d) = (self.a as f64, self.b as f64, self.c as f64, self.d as f64);
        let n = a + b + c + d;
        let cross = a * d - b * c;
        let chi2 = n * cross * cross / ((a + b) * (c + d) * (a + c) * (b + d));
        chi2.is_finite().then_some(chi2)
    }

    /// Negative share of the target row.
    pub fn target_share(&self) -> f64 {
        self.a as f64 / (self.a + self.b).max(1) as f64
    }

    /// Negative share of the comparison row.
    pub fn others_share(&self) -> f64 {
        self.c as f64 / (self.c + self.d).max(1) as f64
    }
}

/// Cramér's V of a 2x2 table.
pub fn cramers_v(chi2: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (chi2 / n as f64).sqrt()
}

/// Severity of an emitted signal. `None` below the warning threshold.
pub fn severity_for(abs_z: f64, config: &BiasConfig) -> Option<Severity> {
    if abs_z >= config.z_critical_threshold {
        Some(Severity::High)
    } else if abs_z >= config.z_warning_threshold {
        Some(Severity::Medium)
    } else {
        None
    }
}
