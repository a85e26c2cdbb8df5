//! Core rule and violation types.
//!
//! Defines the five Shewhart run rules, the per-point [`Violations`] record
//! and the [`DataPoint`] that pairs a measurement with its flags.
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five run rules evaluated at every point.
///
/// Each rule inspects a fixed trailing window ending at the point under
/// test. A window that would start before the first point is never
/// violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// One point beyond the ±3 sigma limits.
    ///
    /// A single extreme outlier.
    ThreeSigmaViolation,

    /// 8 consecutive points strictly above, or strictly below, the mean.
    ///
    /// Indicates a sustained shift in the process mean.
    EightPointsAboveBelowMean,

    /// 6 consecutive points strictly increasing or strictly decreasing.
    ///
    /// Indicates drift. Equal neighbours break the trend.
    SixPointTrend,

    /// 2 of 3 consecutive points beyond ±2 sigma.
    ///
    /// Outliers are counted regardless of side: one point above +2σ and
    /// one below −2σ in the same window fire the rule.
    TwoOfThreeOuterThirdViolation,

    /// 15 consecutive points strictly within ±1 sigma of the mean.
    ///
    /// Mean hugging: variation is too small to be natural.
    InnerThird15ConsecutiveViolation,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 5] = [
        Rule::ThreeSigmaViolation,
        Rule::EightPointsAboveBelowMean,
        Rule::SixPointTrend,
        Rule::TwoOfThreeOuterThirdViolation,
        Rule::InnerThird15ConsecutiveViolation,
    ];

    /// Number of points in the trailing window, including the point itself.
    pub fn window(self) -> usize {
        match self {
            Rule::ThreeSigmaViolation => 1,
            Rule::EightPointsAboveBelowMean => 8,
            Rule::SixPointTrend => 6,
            Rule::TwoOfThreeOuterThirdViolation => 3,
            Rule::InnerThird15ConsecutiveViolation => 15,
        }
    }

    /// Canonical rule name, as used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Rule::ThreeSigmaViolation => "ThreeSigmaViolation",
            Rule::EightPointsAboveBelowMean => "EightPointsAboveBelowMean",
            Rule::SixPointTrend => "SixPointTrend",
            Rule::TwoOfThreeOuterThirdViolation => "TwoOfThreeOuterThirdViolation",
            Rule::InnerThird15ConsecutiveViolation => "InnerThird15ConsecutiveViolation",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One flag per [`Rule`].
///
/// Used both for a single point and, as a summary, for a whole series. The
/// flags are independent; there is no priority between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Violations {
    /// See [`Rule::ThreeSigmaViolation`].
    pub three_sigma_violation: bool,
    /// See [`Rule::EightPointsAboveBelowMean`].
    pub eight_points_above_below_mean: bool,
    /// See [`Rule::SixPointTrend`].
    pub six_point_trend: bool,
    /// See [`Rule::TwoOfThreeOuterThirdViolation`].
    pub two_of_three_outer_third_violation: bool,
    /// See [`Rule::InnerThird15ConsecutiveViolation`].
    pub inner_third_15_consecutive_violation: bool,
}

impl Violations {
    /// Flag for a single rule.
    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::ThreeSigmaViolation => self.three_sigma_violation,
            Rule::EightPointsAboveBelowMean => self.eight_points_above_below_mean,
            Rule::SixPointTrend => self.six_point_trend,
            Rule::TwoOfThreeOuterThirdViolation => self.two_of_three_outer_third_violation,
            Rule::InnerThird15ConsecutiveViolation => self.inner_third_15_consecutive_violation,
        }
    }

    /// `true` if any rule is flagged.
    pub fn any(&self) -> bool {
        Rule::ALL.iter().any(|&rule| self.get(rule))
    }

    /// Rules that are flagged, in [`Rule::ALL`] order.
    pub fn fired(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(move |&rule| self.get(rule))
    }

    /// Flag-wise logical OR.
    #[must_use]
    pub fn merge(self, other: Violations) -> Violations {
        Violations {
            three_sigma_violation: self.three_sigma_violation || other.three_sigma_violation,
            eight_points_above_below_mean: self.eight_points_above_below_mean
                || other.eight_points_above_below_mean,
            six_point_trend: self.six_point_trend || other.six_point_trend,
            two_of_three_outer_third_violation: self.two_of_three_outer_third_violation
                || other.two_of_three_outer_third_violation,
            inner_third_15_consecutive_violation: self.inner_third_15_consecutive_violation
                || other.inner_third_15_consecutive_violation,
        }
    }
}

/// A single measurement with the rules it violates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    /// The original measurement.
    pub value: f64,
    /// Rules violated by the window ending at this point.
    pub violations: Violations,
}

/// A rule violation detected on the series.
///
/// Associates a specific point index with the rule it violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// The index of the point where the violation was detected.
    pub point_index: usize,
    /// The violated rule.
    pub rule: Rule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_windows() {
        let windows: Vec<usize> = Rule::ALL.iter().map(|r| r.window()).collect();
        assert_eq!(windows, vec![1, 8, 6, 3, 15]);
    }

    #[test]
    fn test_rule_display_matches_name() {
        for rule in Rule::ALL {
            assert_eq!(rule.to_string(), rule.name());
        }
    }

    #[test]
    fn test_default_violations_is_clear() {
        let v = Violations::default();
        assert!(!v.any());
        assert_eq!(v.fired().count(), 0);
    }

    #[test]
    fn test_get_matches_fields() {
        let v = Violations {
            six_point_trend: true,
            ..Violations::default()
        };
        assert!(v.get(Rule::SixPointTrend));
        assert!(!v.get(Rule::ThreeSigmaViolation));
        assert_eq!(v.fired().collect::<Vec<_>>(), vec![Rule::SixPointTrend]);
    }

    #[test]
    fn test_merge_is_or() {
        let a = Violations {
            three_sigma_violation: true,
            ..Violations::default()
        };
        let b = Violations {
            inner_third_15_consecutive_violation: true,
            ..Violations::default()
        };
        let merged = a.merge(b);
        assert!(merged.three_sigma_violation);
        assert!(merged.inner_third_15_consecutive_violation);
        assert!(!merged.eight_points_above_below_mean);
        assert_eq!(merged, b.merge(a));
    }

    #[test]
    fn test_violation_json_shape() {
        let v = Violation {
            point_index: 5,
            rule: Rule::SixPointTrend,
        };
        let json = serde_json::to_value(v).expect("serialize");
        assert_eq!(json["pointIndex"].as_u64(), Some(5));
        assert_eq!(json["rule"].as_str(), Some(Rule::SixPointTrend.name()));

        let back: Violation = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, v);
    }

    #[test]
    fn test_violations_serialize_with_rule_names() {
        let v = Violations {
            inner_third_15_consecutive_violation: true,
            ..Violations::default()
        };
        let json = serde_json::to_value(v).expect("serialize");
        for rule in Rule::ALL {
            assert_eq!(json[rule.name()].as_bool(), Some(v.get(rule)), "{rule}");
        }
    }
}
