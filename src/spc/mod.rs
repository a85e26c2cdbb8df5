//! Statistical Process Control (SPC) run-rule evaluation.
//!
//! Evaluates a series of individual measurements against five Shewhart
//! run rules using the mean and standard deviation of the whole series.
//!
//! # Statistics
//!
//! - [`SigmaZones`] — mean, standard deviation and the ±1/2/3 sigma boundaries
//! - [`StdDevMode`] — sample (Bessel-corrected) or population divisor
//!
//! # Run Rules
//!
//! - [`Rule`] — the five rules and their window sizes
//! - [`ShewhartRules`] — evaluates all five at a point via [`RunRule`]
//!
//! # Analysis
//!
//! - [`analyze`] / [`analyze_with`] — one-shot evaluation producing an
//!   [`AnalysisResult`]
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special Causes",
//!   *Journal of Quality Technology* 16(4), pp. 237-239.

mod analysis;
mod chart;
mod config;
mod rules;
mod statistics;

pub use analysis::{analyze, analyze_with, AnalysisResult};
pub use chart::{DataPoint, Rule, Violation, Violations};
pub use config::{ShewhartConfig, DEFAULT_MIN_POINTS};
pub use rules::{RunRule, ShewhartRules};
pub use statistics::{SigmaZones, StdDevMode};
