//! Sales data structures: raw records, the per-day aggregated series,
//! and the requested projection range.

use crate::error::{ForecastError, Result};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sale within the historical window.
///
/// Only the fields the forecasting core reads; the surrounding system
/// stores more per sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub product: String,
    pub channel: String,
}

impl SaleRecord {
    pub fn new(date: NaiveDate, amount: f64, product: &str, channel: &str) -> Self {
        Self {
            date,
            amount,
            product: product.to_string(),
            channel: channel.to_string(),
        }
    }
}

/// Ordered per-day sale totals over the lookback window.
///
/// Days with no sales are absent, never zero-filled; consumers iterate
/// only over days that actually sold, in ascending date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    totals: BTreeMap<NaiveDate, f64>,
}

impl DailySeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum records into per-day totals.
    pub fn from_records(records: &[SaleRecord]) -> Self {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in records {
            *totals.entry(record.date).or_insert(0.0) += record.amount;
        }
        Self { totals }
    }

    /// Add an amount to a day's total.
    pub fn add(&mut self, date: NaiveDate, amount: f64) {
        *self.totals.entry(date).or_insert(0.0) += amount;
    }

    /// Number of days with sales.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check whether any day has sales.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Daily totals in ascending date order.
    pub fn values(&self) -> Vec<f64> {
        self.totals.values().copied().collect()
    }

    /// Iterate `(date, total)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &f64)> {
        self.totals.iter()
    }

    /// Total for a specific day, if it sold anything.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.totals.get(&date).copied()
    }
}

/// Inclusive calendar-day range for the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a range from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_day(start)
            .map_err(|_| ForecastError::InvalidDateRange(format!("bad start date {start:?}")))?;
        let end = parse_day(end)
            .map_err(|_| ForecastError::InvalidDateRange(format!("bad end date {end:?}")))?;
        Ok(Self { start, end })
    }

    /// Days in the range, ascending. Empty when `end < start`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of days in the range (0 when inverted).
    pub fn num_days(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).num_days() as u64 + 1
        }
    }
}

fn parse_day(s: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// English name of a weekday, matching the keys used by the seasonality
/// profile.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_series_sums_same_day_records() {
        let records = vec![
            SaleRecord::new(day(2025, 1, 2), 100.0, "A", "Online"),
            SaleRecord::new(day(2025, 1, 1), 50.0, "B", "Store"),
            SaleRecord::new(day(2025, 1, 2), 25.0, "A", "Store"),
        ];
        let series = DailySeries::from_records(&records);

        assert_eq!(series.len(), 2);
        assert_relative_eq!(series.get(day(2025, 1, 2)).unwrap(), 125.0, epsilon = 1e-10);
        // Ascending by date regardless of record order.
        assert_eq!(series.values(), vec![50.0, 125.0]);
    }

    #[test]
    fn daily_series_skips_missing_days() {
        let mut series = DailySeries::new();
        series.add(day(2025, 3, 1), 10.0);
        series.add(day(2025, 3, 5), 20.0);

        assert_eq!(series.len(), 2);
        assert!(series.get(day(2025, 3, 3)).is_none());
        assert_eq!(series.values(), vec![10.0, 20.0]);
    }

    #[test]
    fn date_range_parses_iso_days() {
        let range = DateRange::parse("2025-02-01", "2025-02-03").unwrap();
        assert_eq!(range.num_days(), 3);
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(days, vec![day(2025, 2, 1), day(2025, 2, 2), day(2025, 2, 3)]);
    }

    #[test]
    fn date_range_single_day() {
        let range = DateRange::parse("2025-02-01", "2025-02-01").unwrap();
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.days().count(), 1);
    }

    #[test]
    fn date_range_inverted_is_empty_not_error() {
        let range = DateRange::parse("2025-02-03", "2025-02-01").unwrap();
        assert_eq!(range.num_days(), 0);
        assert_eq!(range.days().count(), 0);
    }

    #[test]
    fn date_range_rejects_malformed_input() {
        assert!(matches!(
            DateRange::parse("not-a-date", "2025-02-01"),
            Err(ForecastError::InvalidDateRange(_))
        ));
        assert!(matches!(
            DateRange::parse("2025-02-01", "2025-13-40"),
            Err(ForecastError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn weekday_names_cover_the_week() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        // 2025-01-01 is a Wednesday.
        use chrono::Datelike;
        assert_eq!(weekday_name(day(2025, 1, 1).weekday()), "Wednesday");
    }
}
