//! Day-of-week seasonality estimated from raw sale records.

use crate::core::{weekday_name, SaleRecord, SeasonalityFactor};
use crate::stats::round_to;
use chrono::{Datelike, Weekday};

/// Revenue share of a weekday with no signal.
const UNIFORM_FACTOR: f64 = 1.0 / 7.0;

/// Per-weekday revenue share over the historical window.
///
/// All seven weekdays are always present. A weekday with no recorded
/// sales gets the uniform 1/7 factor instead of zero, so a quiet day
/// never pins the projection to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayProfile {
    /// Indexed by days from Monday.
    factors: [f64; 7],
}

impl WeekdayProfile {
    /// The flat profile: every weekday at 1/7.
    pub fn uniform() -> Self {
        Self {
            factors: [UNIFORM_FACTOR; 7],
        }
    }

    /// Bucket record amounts by weekday and normalize by the grand total.
    pub fn from_records(records: &[SaleRecord]) -> Self {
        let mut totals = [0.0f64; 7];
        let mut counts = [0usize; 7];

        for record in records {
            let idx = record.date.weekday().num_days_from_monday() as usize;
            totals[idx] += record.amount;
            counts[idx] += 1;
        }

        let grand_total: f64 = totals.iter().sum();

        let mut factors = [UNIFORM_FACTOR; 7];
        for idx in 0..7 {
            if counts[idx] > 0 && grand_total > 0.0 {
                factors[idx] = totals[idx] / grand_total;
            }
        }

        Self { factors }
    }

    /// Revenue-share factor for a weekday.
    pub fn factor(&self, weekday: Weekday) -> f64 {
        self.factors[weekday.num_days_from_monday() as usize]
    }

    /// Presentation list: one entry per weekday, factors rounded to 3
    /// decimals, sorted alphabetically by day name.
    pub fn factors(&self) -> Vec<SeasonalityFactor> {
        let mut list: Vec<SeasonalityFactor> = WEEKDAYS
            .iter()
            .map(|&weekday| SeasonalityFactor {
                day: weekday_name(weekday).to_string(),
                factor: round_to(self.factor(weekday), 3),
            })
            .collect();
        list.sort_by(|a, b| a.day.cmp(&b.day));
        list
    }
}

impl Default for WeekdayProfile {
    fn default() -> Self {
        Self::uniform()
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
