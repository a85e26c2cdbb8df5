//! Run rules for detecting non-random patterns in individual measurements.
//!
//! Each rule looks at a fixed trailing window ending at the point under
//! test and compares it against the global [`SigmaZones`]. A window that
//! would extend before the first point is not violated. All comparisons
//! against zone boundaries are strict.
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special Causes",
//!   *Journal of Quality Technology* 16(4), pp. 237-239.

use super::chart::{Rule, Violations};
use super::statistics::SigmaZones;

/// Trait for applying run rules to a dataset.
///
/// Implementors decide per point; [`RunRule::check`] maps that over the
/// whole dataset.
pub trait RunRule: Sync {
    /// Evaluate every rule for the window ending at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= data.len()`.
    fn evaluate(&self, data: &[f64], index: usize, zones: &SigmaZones) -> Violations;

    /// Evaluate every point, returning one record per input value in order.
    fn check(&self, data: &[f64], zones: &SigmaZones) -> Vec<Violations> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..data.len())
                .into_par_iter()
                .map(|i| self.evaluate(data, i, zones))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..data.len())
                .map(|i| self.evaluate(data, i, zones))
                .collect()
        }
    }
}

/// The five Shewhart rules.
///
/// 1. One point beyond ±3σ
/// 2. 8 consecutive points on one side of the mean
/// 3. 6 consecutive points steadily increasing or decreasing
/// 4. 2 of 3 consecutive points beyond ±2σ, either side
/// 5. 15 consecutive points within ±1σ
#[derive(Debug, Clone, Copy, Default)]
pub struct ShewhartRules;

impl RunRule for ShewhartRules {
    fn evaluate(&self, data: &[f64], index: usize, zones: &SigmaZones) -> Violations {
        Violations {
            three_sigma_violation: check_three_sigma(data, index, zones),
            eight_points_above_below_mean: check_eight_one_side(data, index, zones),
            six_point_trend: check_six_trend(data, index),
            two_of_three_outer_third_violation: check_two_of_three(data, index, zones),
            inner_third_15_consecutive_violation: check_fifteen_within(data, index, zones),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// The `rule.window()` values ending at `index` inclusive, or `None` if
/// the window would start before the first point.
fn trailing_window(data: &[f64], index: usize, rule: Rule) -> Option<&[f64]> {
    let len = rule.window();
    let start = (index + 1).checked_sub(len)?;
    let window = &data[start..=index];
    debug_assert_eq!(window.len(), len);
    Some(window)
}

/// Rule 1: point beyond ±3σ.
fn check_three_sigma(data: &[f64], index: usize, zones: &SigmaZones) -> bool {
    zones.beyond_3_sigma(data[index])
}

/// Rule 2: 8 consecutive points strictly above or strictly below the mean.
///
/// A point exactly on the mean belongs to neither side.
fn check_eight_one_side(data: &[f64], index: usize, zones: &SigmaZones) -> bool {
    let Some(window) = trailing_window(data, index, Rule::EightPointsAboveBelowMean) else {
        return false;
    };
    let above = window.iter().all(|&v| v > zones.mean);
    let below = window.iter().all(|&v| v < zones.mean);
    above || below
}

/// Rule 3: 6 consecutive points strictly increasing or strictly decreasing.
fn check_six_trend(data: &[f64], index: usize) -> bool {
    let Some(window) = trailing_window(data, index, Rule::SixPointTrend) else {
        return false;
    };
    let up = window.windows(2).all(|w| w[1] > w[0]);
    let down = window.windows(2).all(|w| w[1] < w[0]);
    up || down
}

/// Rule 4: at least 2 of 3 consecutive points beyond ±2σ.
///
/// Points above +2σ and below −2σ count together.
fn check_two_of_three(data: &[f64], index: usize, zones: &SigmaZones) -> bool {
    let Some(window) = trailing_window(data, index, Rule::TwoOfThreeOuterThirdViolation) else {
        return false;
    };
    window.iter().filter(|&&v| zones.beyond_2_sigma(v)).count() >= 2
}

/// Rule 5: 15 consecutive points strictly within ±1σ.
fn check_fifteen_within(data: &[f64], index: usize, zones: &SigmaZones) -> bool {
    let Some(window) = trailing_window(data, index, Rule::InnerThird15ConsecutiveViolation)
    else {
        return false;
    };
    window.iter().all(|&v| zones.within_1_sigma(v))
}
