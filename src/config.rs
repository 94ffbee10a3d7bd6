//! Configuration for the forecasting engine.
//!
//! The lookback window and moving-average width are explicit parameters
//! passed into the engine rather than ambient constants.

use crate::error::{ForecastError, Result};

/// Tunable parameters for a forecast run.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Trailing historical window, in days, ending at "now".
    pub lookback_days: u32,
    /// Moving-average window over the daily series.
    pub ma_window: usize,
    /// Anomaly threshold in standard deviations from the mean.
    pub anomaly_threshold: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lookback_days: 90,
            ma_window: 7,
            anomaly_threshold: 2.0,
        }
    }
}

impl ForecastConfig {
    /// Create a config with the default 90-day lookback and 7-day window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the historical lookback window in days.
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Set the moving-average window.
    pub fn with_ma_window(mut self, window: usize) -> Self {
        self.ma_window = window;
        self
    }

    /// Set the anomaly threshold in standard deviations.
    pub fn with_anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = threshold;
        self
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.lookback_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "lookback_days must be positive".to_string(),
            ));
        }
        if self.ma_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "ma_window must be positive".to_string(),
            ));
        }
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "anomaly_threshold must be a positive finite number".to_string(),
            ));
        }
        Ok(())
    }
}
