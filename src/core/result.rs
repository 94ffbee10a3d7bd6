//! Forecast output contract.
//!
//! These types serialize to the JSON shape consumed by the API and
//! report layers: `forecast` points, drop percentage, alert level,
//! product/channel breakdowns, seasonality factors, and metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub expected_amount: f64,
}

/// Aggregated sales for one product or channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStat {
    pub name: String,
    pub total: f64,
    pub count: u64,
    pub avg: f64,
    /// Share of the grand total, in percent.
    pub pct: f64,
}

/// Revenue share of one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityFactor {
    pub day: String,
    pub factor: f64,
}

/// Direction of the historical sales trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendLabel::Up => "up",
            TrendLabel::Down => "down",
            TrendLabel::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// Summary statistics attached to a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetadata {
    pub historical_avg: f64,
    pub std_dev: f64,
    pub trend: TrendLabel,
    pub model: String,
    /// Heuristic confidence in [0, 1].
    pub confidence: f64,
}

/// Full forecast response.
///
/// The analytical sections are `None` in the degraded empty form, which
/// serializes them as `null` like the legacy payload did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<ForecastPoint>,
    pub drop_pct: f64,
    pub alert: f64,
    pub products: Option<Vec<SegmentStat>>,
    pub channels: Option<Vec<SegmentStat>>,
    pub seasonality: Option<Vec<SeasonalityFactor>>,
    pub meta: Option<ForecastMetadata>,
}

impl ForecastResult {
    /// The legacy fail-soft payload: no points, no sections, zero
    /// drop and alert.
    pub fn empty() -> Self {
        Self {
            forecast: Vec::new(),
            drop_pct: 0.0,
            alert: 0.0,
            products: None,
            channels: None,
            seasonality: None,
            meta: None,
        }
    }

    /// Check whether this is the empty payload.
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty() && self.meta.is_none()
    }
}

/// Outcome of a forecast request.
///
/// The legacy behavior collapsed "no history" and "unparseable dates"
/// into identical empty payloads; this keeps the causes distinguishable
/// while `into_payload` preserves the old output shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// A full forecast was produced.
    Ready(ForecastResult),
    /// The tenant had no sales in the lookback window.
    NoHistory,
    /// The requested dates failed to parse.
    InvalidRange(String),
}

impl ForecastOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ForecastOutcome::Ready(_))
    }

    /// Borrow the result when one was produced.
    pub fn as_ready(&self) -> Option<&ForecastResult> {
        match self {
            ForecastOutcome::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Collapse to the wire payload, mapping degraded outcomes to the
    /// legacy empty result.
    pub fn into_payload(self) -> ForecastResult {
        match self {
            ForecastOutcome::Ready(result) => result,
            ForecastOutcome::NoHistory | ForecastOutcome::InvalidRange(_) => {
                ForecastResult::empty()
            }
        }
    }
}
