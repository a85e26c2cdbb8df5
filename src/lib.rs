//! # u-shewhart
//!
//! Shewhart control chart run rules for individual measurements.
//!
//! Given a series of values, computes the global mean, standard deviation
//! and sigma zones once, then flags every point against five run rules:
//!
//! | Rule | Window | Condition |
//! |---|---|---|
//! | `ThreeSigmaViolation` | 1 | beyond ±3σ |
//! | `EightPointsAboveBelowMean` | 8 | all above or all below the mean |
//! | `SixPointTrend` | 6 | strictly increasing or decreasing |
//! | `TwoOfThreeOuterThirdViolation` | 3 | at least 2 beyond ±2σ, either side |
//! | `InnerThird15ConsecutiveViolation` | 15 | all within ±1σ |
//!
//! ## Modules
//!
//! - [`spc`] — statistics, run rules and the analysis entry points
//!
//! ## Example
//!
//! ```
//! use u_shewhart::spc::{analyze, Rule};
//!
//! let data: Vec<f64> = (1..=6_i32).map(f64::from).collect();
//! let result = analyze(&data);
//! assert!(result.points[5].violations.get(Rule::SixPointTrend));
//! assert!(result.violations.six_point_trend);
//! ```
//!
//! ## Features
//!
//! - `parallel` — evaluate points on the rayon thread pool
//!
//! ## Design Philosophy
//!
//! - **Domain-agnostic**: operates on raw `f64` data
//! - **Numerical stability**: Leverages `u-numflow` for stable statistics
//! - **Pure**: one immutable result per call, no shared state
//! - **Degenerate input tolerated**: NaN/infinite statistics propagate and
//!   the result is flagged invalid instead of failing

mod error;
pub mod spc;

pub use error::{Result, ShewhartError};
