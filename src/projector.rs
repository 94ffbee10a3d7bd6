//! Forward projection of daily sales.
//!
//! Each projected day blends the regression line with the last
//! historical moving-average value, applies the weekday seasonality
//! factor, and clamps the result to a plausible band around the
//! historical average. The moving-average anchor is intentionally fixed:
//! every future day blends against the same last historical value.

use crate::analysis::{TrendSummary, WeekdayProfile};
use crate::core::{DateRange, ForecastMetadata, ForecastPoint};
use crate::stats::{mean, round_to};
use chrono::Datelike;

/// Model tag reported in forecast metadata.
pub const MODEL_TAG: &str = "trend_seasonal_blend";

/// Weight of the trend component against the moving-average anchor.
const TREND_BLEND_WEIGHT: f64 = 0.5;

/// Clamp band around the historical daily average.
const CLAMP_FLOOR_FACTOR: f64 = 0.6;
const CLAMP_CAP_FACTOR: f64 = 1.6;

/// Alert thresholds: historical anomaly concentration wins over forecast
/// divergence; the two signals are never combined.
const ANOMALY_ALERT_PCT: f64 = 10.0;
const DROP_ALERT_PCT: f64 = 20.0;

/// Daily projection plus its summary signals.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// One point per day of the requested range, ascending.
    pub points: Vec<ForecastPoint>,
    /// Percent drop of the forecast average vs the historical average
    /// (negative when the forecast is higher), rounded to 2 decimals.
    pub drop_pct: f64,
    /// Alert level, rounded to 2 decimals; 0.0 means no alert.
    pub alert: f64,
}

/// Project daily sales over an inclusive date range.
///
/// `summary` must come from the same historical series the projection
/// continues; the regression index sequence picks up where the history
/// ends.
pub fn project(summary: &TrendSummary, profile: &WeekdayProfile, range: DateRange) -> Projection {
    let ma_anchor = summary.ma_values.last().copied();
    let mut day_offset = summary.ma_values.len();

    let mut points = Vec::new();
    let mut raw_values = Vec::new();

    for date in range.days() {
        let mut predicted = summary.intercept + summary.slope * day_offset as f64;

        if let Some(anchor) = ma_anchor {
            predicted = predicted * TREND_BLEND_WEIGHT + anchor * (1.0 - TREND_BLEND_WEIGHT);
        }

        predicted *= profile.factor(date.weekday()) * 7.0;

        let floor = summary.avg * CLAMP_FLOOR_FACTOR;
        let cap = if summary.avg != 0.0 {
            summary.avg * CLAMP_CAP_FACTOR
        } else {
            predicted
        };
        predicted = predicted.max(floor).min(cap);

        points.push(ForecastPoint {
            date,
            expected_amount: round_to(predicted, 2),
        });
        // Unrounded values feed the drop computation.
        raw_values.push(predicted);

        day_offset += 1;
    }

    let drop_pct = if !raw_values.is_empty() && summary.avg > 0.0 {
        (summary.avg - mean(&raw_values)) / summary.avg * 100.0
    } else {
        0.0
    };

    let alert = if summary.anomaly_pct > ANOMALY_ALERT_PCT {
        summary.anomaly_pct
    } else if drop_pct.abs() > DROP_ALERT_PCT {
        drop_pct.abs()
    } else {
        0.0
    };

    Projection {
        points,
        drop_pct: round_to(drop_pct, 2),
        alert: round_to(alert, 2),
    }
}

/// Build forecast metadata from the historical summary.
pub fn metadata(summary: &TrendSummary) -> ForecastMetadata {
    ForecastMetadata {
        historical_avg: round_to(summary.avg, 2),
        std_dev: round_to(summary.std_dev, 2),
        trend: summary.label,
        model: MODEL_TAG.to_string(),
        confidence: summary.confidence,
    }
}
