//! Global statistics and sigma zones.
//!
//! The mean and standard deviation are computed once over the entire
//! dataset. Every rule is evaluated against these global values; windows
//! never recompute local statistics.
//!
//! Mean and standard deviation come from `u_numflow::stats` (Kahan
//! summation and Welford's algorithm). Degenerate input is tolerated rather
//! than rejected: where `u_numflow` has no answer (an empty dataset, a
//! single point under [`StdDevMode::Sample`], or non-finite values) the
//! statistic is NaN, and so is every zone boundary derived from it.

use serde::{Deserialize, Serialize};
use u_numflow::stats;

/// Divisor used for the variance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StdDevMode {
    /// Bessel-corrected, divides by `n - 1`.
    #[default]
    Sample,
    /// Divides by `n`.
    Population,
}

impl StdDevMode {
    /// Map the `use_sample_std_dev` switch onto a mode.
    pub fn from_sample_flag(use_sample: bool) -> Self {
        if use_sample {
            StdDevMode::Sample
        } else {
            StdDevMode::Population
        }
    }

    /// Standard deviation of `data` under this mode, NaN if undefined.
    pub fn std_dev(self, data: &[f64]) -> f64 {
        match self {
            StdDevMode::Sample => stats::std_dev(data),
            StdDevMode::Population => stats::population_std_dev(data),
        }
        .unwrap_or(f64::NAN)
    }
}

/// Mean, standard deviation and the six sigma-zone boundaries.
///
/// # Invariants
///
/// - `pos_sigma_k == mean + k * st_dev`
/// - `neg_sigma_k == mean - k * st_dev`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigmaZones {
    /// Mean of the whole dataset (center line).
    pub mean: f64,
    /// Standard deviation of the whole dataset.
    pub st_dev: f64,
    /// `mean + 1σ`.
    pub pos_sigma_1: f64,
    /// `mean + 2σ`.
    pub pos_sigma_2: f64,
    /// `mean + 3σ`.
    pub pos_sigma_3: f64,
    /// `mean - 1σ`.
    pub neg_sigma_1: f64,
    /// `mean - 2σ`.
    pub neg_sigma_2: f64,
    /// `mean - 3σ`.
    pub neg_sigma_3: f64,
}

impl SigmaZones {
    /// Derive zone boundaries from a mean and standard deviation.
    pub fn from_moments(mean: f64, st_dev: f64) -> Self {
        Self {
            mean,
            st_dev,
            pos_sigma_1: mean + st_dev,
            pos_sigma_2: mean + 2.0 * st_dev,
            pos_sigma_3: mean + 3.0 * st_dev,
            neg_sigma_1: mean - st_dev,
            neg_sigma_2: mean - 2.0 * st_dev,
            neg_sigma_3: mean - 3.0 * st_dev,
        }
    }

    /// Compute the global statistics of `data`.
    pub fn compute(data: &[f64], mode: StdDevMode) -> Self {
        let mean = stats::mean(data).unwrap_or(f64::NAN);
        Self::from_moments(mean, mode.std_dev(data))
    }

    /// `true` when both mean and standard deviation are finite.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.st_dev.is_finite()
    }

    /// Strictly beyond ±3σ.
    pub fn beyond_3_sigma(&self, value: f64) -> bool {
        value > self.pos_sigma_3 || value < self.neg_sigma_3
    }

    /// Strictly beyond ±2σ, on either side.
    pub fn beyond_2_sigma(&self, value: f64) -> bool {
        value > self.pos_sigma_2 || value < self.neg_sigma_2
    }

    /// Strictly inside the ±1σ band.
    pub fn within_1_sigma(&self, value: f64) -> bool {
        value > self.neg_sigma_1 && value < self.pos_sigma_1
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn zones_are_symmetric(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=50)
        ) {
            let z = SigmaZones::compute(&data, StdDevMode::Sample);
            prop_assert!(z.st_dev >= 0.0);
            for (k, (pos, neg)) in [
                (z.pos_sigma_1, z.neg_sigma_1),
                (z.pos_sigma_2, z.neg_sigma_2),
                (z.pos_sigma_3, z.neg_sigma_3),
            ]
            .into_iter()
            .enumerate()
            {
                let k = (k + 1) as f64;
                prop_assert!((pos - (z.mean + k * z.st_dev)).abs() < 1e-9);
                prop_assert!((neg - (z.mean - k * z.st_dev)).abs() < 1e-9);
            }
        }

        #[test]
        fn sample_exceeds_population(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=50)
        ) {
            let s = SigmaZones::compute(&data, StdDevMode::Sample).st_dev;
            let p = SigmaZones::compute(&data, StdDevMode::Population).st_dev;
            prop_assert!(s >= p - 1e-12, "sample {s} < population {p}");
        }
    }
}
