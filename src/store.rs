//! Data-access seam between the forecasting engine and sales storage.
//!
//! The engine never queries storage directly; it asks a [`SalesStore`]
//! for the per-day totals and raw records of a tenant's lookback
//! window. Production backends implement this over their database; the
//! in-memory store here backs tests and examples.

use crate::core::{DailySeries, SaleRecord};
use crate::error::Result;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Read access to a tenant's sales over a trailing window.
///
/// An unknown tenant is indistinguishable from a tenant with no sales:
/// both produce an empty series. Genuine I/O failures surface as
/// [`crate::ForecastError::DataAccess`].
pub trait SalesStore {
    /// Per-day summed sale amounts for the last `lookback_days` days.
    fn daily_totals(&self, tenant: &str, lookback_days: u32) -> Result<DailySeries>;

    /// Raw sale records for the same window, for segment and
    /// seasonality aggregation.
    fn records(&self, tenant: &str, lookback_days: u32) -> Result<Vec<SaleRecord>>;
}

/// In-memory [`SalesStore`] keyed by tenant code.
///
/// The lookback window is anchored at an explicit `now` date instead of
/// the wall clock, which keeps forecast runs reproducible.
#[derive(Debug, Clone)]
pub struct MemorySalesStore {
    now: NaiveDate,
    sales: HashMap<String, Vec<SaleRecord>>,
}

impl MemorySalesStore {
    /// Create an empty store anchored at `now`.
    pub fn new(now: NaiveDate) -> Self {
        Self {
            now,
            sales: HashMap::new(),
        }
    }

    /// Add one sale for a tenant.
    pub fn insert(&mut self, tenant: &str, record: SaleRecord) {
        self.sales.entry(tenant.to_string()).or_default().push(record);
    }

    /// Add many sales for a tenant.
    pub fn extend(&mut self, tenant: &str, records: impl IntoIterator<Item = SaleRecord>) {
        self.sales
            .entry(tenant.to_string())
            .or_default()
            .extend(records);
    }

    /// The date anchoring the lookback window.
    pub fn now(&self) -> NaiveDate {
        self.now
    }

    fn window(&self, tenant: &str, lookback_days: u32) -> impl Iterator<Item = &SaleRecord> {
        let cutoff = self.now - Duration::days(lookback_days as i64);
        self.sales
            .get(tenant)
            .into_iter()
            .flatten()
            .filter(move |record| record.date >= cutoff)
    }
}

impl SalesStore for MemorySalesStore {
    fn daily_totals(&self, tenant: &str, lookback_days: u32) -> Result<DailySeries> {
        let mut series = DailySeries::new();
        for record in self.window(tenant, lookback_days) {
            series.add(record.date, record.amount);
        }
        Ok(series)
    }

    fn records(&self, tenant: &str, lookback_days: u32) -> Result<Vec<SaleRecord>> {
        Ok(self.window(tenant, lookback_days).cloned().collect())
    }
}
