//! Analysis configuration.

use serde::{Deserialize, Serialize};

use super::statistics::StdDevMode;
use crate::error::{Result, ShewhartError};

/// Default minimum number of points for a statistically valid chart.
pub const DEFAULT_MIN_POINTS: usize = 20;

/// Settings for [`analyze_with`](super::analyze_with).
///
/// Deserializes from camelCase keys (`minPoints`, `useSampleStDev`);
/// missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use u_shewhart::spc::ShewhartConfig;
///
/// let config = ShewhartConfig::new().min_points(25).use_sample_std_dev(false);
/// assert_eq!(config.min_points, 25);
/// assert!(!config.use_sample_std_dev);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShewhartConfig {
    /// Minimum dataset length for the result to be flagged valid.
    pub min_points: usize,
    /// Bessel-corrected (sample) standard deviation when `true`,
    /// population standard deviation otherwise.
    #[serde(rename = "useSampleStDev")]
    pub use_sample_std_dev: bool,
}

impl Default for ShewhartConfig {
    fn default() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            use_sample_std_dev: true,
        }
    }
}

impl ShewhartConfig {
    /// Default configuration: 20 points, sample standard deviation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum point count for validity.
    #[must_use]
    pub fn min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Choose between sample and population standard deviation.
    #[must_use]
    pub fn use_sample_std_dev(mut self, use_sample: bool) -> Self {
        self.use_sample_std_dev = use_sample;
        self
    }

    /// Standard deviation mode selected by this configuration.
    pub fn std_dev_mode(&self) -> StdDevMode {
        StdDevMode::from_sample_flag(self.use_sample_std_dev)
    }

    /// Reject settings that cannot produce a meaningful result.
    pub fn validate(&self) -> Result<()> {
        if self.min_points == 0 {
            return Err(ShewhartError::InvalidConfiguration {
                reason: "min_points must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
