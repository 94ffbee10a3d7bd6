//! Trend and anomaly analysis over the historical daily series.

use crate::config::ForecastConfig;
use crate::core::TrendLabel;
use crate::stats::{anomaly_ratio, linear_trend, mean, moving_average, round_to, std_dev};

/// Guard against dividing by a vanishing average when labelling the trend.
const TREND_EPSILON: f64 = 1e-6;

/// Relative slope beyond which the trend counts as rising or falling.
const TREND_THRESHOLD: f64 = 0.01;

/// Everything the projector needs to know about the historical series,
/// computed in one pass.
#[derive(Debug, Clone)]
pub struct TrendSummary {
    /// Trailing moving average, same length as the input.
    pub ma_values: Vec<f64>,
    pub slope: f64,
    pub intercept: f64,
    /// Mean daily sales over days that sold anything.
    pub avg: f64,
    /// Population standard deviation of the daily totals.
    pub std_dev: f64,
    /// Percentage of days beyond the anomaly threshold.
    pub anomaly_pct: f64,
    pub label: TrendLabel,
    /// Heuristic confidence in [0, 1].
    pub confidence: f64,
}

impl TrendSummary {
    /// Analyze a daily series (ascending date order).
    pub fn analyze(values: &[f64], config: &ForecastConfig) -> Self {
        let ma_values = moving_average(values, config.ma_window);
        let (slope, intercept) = linear_trend(values);
        let avg = if values.is_empty() { 0.0 } else { mean(values) };
        let sd = std_dev(values);
        let anomaly_pct = anomaly_ratio(values, config.anomaly_threshold);

        Self {
            ma_values,
            slope,
            intercept,
            avg,
            std_dev: sd,
            anomaly_pct,
            label: trend_label(slope, avg),
            confidence: confidence_score(sd, avg),
        }
    }
}

/// Classify the slope relative to the average daily value.
///
/// A slope worth more than 1% of the daily average per day counts as a
/// direction; anything else is stable.
pub fn trend_label(slope: f64, avg: f64) -> TrendLabel {
    if avg == 0.0 {
        return TrendLabel::Stable;
    }
    let pct = slope / avg.max(TREND_EPSILON);
    if pct > TREND_THRESHOLD {
        TrendLabel::Up
    } else if pct < -TREND_THRESHOLD {
        TrendLabel::Down
    } else {
        TrendLabel::Stable
    }
}

/// Confidence in [0, 1], inverse to the coefficient of variation,
/// rounded to 3 decimals.
pub fn confidence_score(std_dev: f64, mean: f64) -> f64 {
    if mean <= 0.0 {
        return 0.0;
    }
    let ratio = std_dev / mean;
    round_to((1.0 - ratio).clamp(0.0, 1.0), 3)
}
