//! One-shot Shewhart analysis of a dataset.
//!
//! Statistics are computed once over the whole dataset, every point is
//! evaluated against the five run rules, and the per-point flags are folded
//! into a series-wide summary.
//!
//! Validity and violations are independent: a dataset shorter than
//! `min_points` is flagged invalid but its points are still evaluated.

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::chart::{DataPoint, Violation, Violations};
use super::config::ShewhartConfig;
use super::rules::{RunRule, ShewhartRules};
use super::statistics::{SigmaZones, StdDevMode};
use crate::error::Result;

/// Result of a Shewhart analysis.
///
/// Serializes with the conventional field names (`isValid`, `stDev`,
/// `posSigma1`, ...), the zone boundaries flattened into the top level.
/// Output only: NaN statistics from degenerate input serialize as `null`
/// in JSON and have no faithful way back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `true` when the dataset has at least `min_points` values.
    pub is_valid: bool,
    /// Global mean, standard deviation and sigma-zone boundaries.
    #[serde(flatten)]
    pub zones: SigmaZones,
    /// Each flag is set if any point violates that rule.
    pub violations: Violations,
    /// One entry per input value, in input order.
    pub points: Vec<DataPoint>,
}

impl AnalysisResult {
    fn assemble(is_valid: bool, zones: SigmaZones, points: Vec<DataPoint>) -> Self {
        let violations = points
            .iter()
            .fold(Violations::default(), |acc, p| acc.merge(p.violations));
        Self {
            is_valid,
            zones,
            violations,
            points,
        }
    }

    /// `true` if no rule fired anywhere in the series.
    pub fn is_in_control(&self) -> bool {
        !self.violations.any()
    }

    /// Every `(point, rule)` violation, ordered by point index then rule.
    pub fn violation_list(&self) -> Vec<Violation> {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(point_index, p)| {
                p.violations
                    .fired()
                    .map(move |rule| Violation { point_index, rule })
            })
            .collect()
    }
}

/// Analyze `data` with the default configuration (20 points, sample
/// standard deviation).
///
/// # Examples
///
/// ```
/// use u_shewhart::spc::analyze;
///
/// let result = analyze(&[9.0, 2.0, 5.0, 4.0, 12.0, 7.0]);
/// assert!(!result.is_valid);
/// assert_eq!(format!("{:.3}", result.zones.st_dev), "3.619");
/// assert_eq!(result.points.len(), 6);
/// ```
pub fn analyze(data: &[f64]) -> AnalysisResult {
    let config = ShewhartConfig::default();
    run(data, config.min_points, config.std_dev_mode())
}

/// Analyze `data` with an explicit configuration.
///
/// # Errors
///
/// Returns [`ShewhartError::InvalidConfiguration`](crate::ShewhartError::InvalidConfiguration)
/// if `config.min_points` is zero.
pub fn analyze_with(data: &[f64], config: &ShewhartConfig) -> Result<AnalysisResult> {
    config.validate()?;
    Ok(run(data, config.min_points, config.std_dev_mode()))
}

fn run(data: &[f64], min_points: usize, mode: StdDevMode) -> AnalysisResult {
    let zones = SigmaZones::compute(data, mode);
    if !zones.is_finite() {
        warn!(
            points = data.len(),
            ?mode,
            mean = zones.mean,
            st_dev = zones.st_dev,
            "degenerate statistics; sigma-based rules cannot fire"
        );
    }

    let points: Vec<DataPoint> = data
        .iter()
        .zip(ShewhartRules.check(data, &zones))
        .map(|(&value, violations)| DataPoint { value, violations })
        .collect();

    let is_valid = data.len() >= min_points;
    let result = AnalysisResult::assemble(is_valid, zones, points);

    debug!(
        points = data.len(),
        min_points,
        is_valid,
        mean = result.zones.mean,
        st_dev = result.zones.st_dev,
        in_control = result.is_in_control(),
        "shewhart analysis complete"
    );
    for rule in result.violations.fired() {
        trace!(%rule, "rule fired");
    }

    result
}
