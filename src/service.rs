//! Forecast orchestration: load a tenant's window, run the analysis
//! pipeline, and assemble the response.

use crate::analysis::{by_channel, by_product, TrendSummary, WeekdayProfile};
use crate::config::ForecastConfig;
use crate::core::{DailySeries, DateRange, ForecastOutcome, ForecastResult, SaleRecord};
use crate::error::{ForecastError, Result};
use crate::projector::{metadata, project};
use crate::store::SalesStore;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Default projection horizon applied when the caller omits the end
/// date.
const DEFAULT_HORIZON_DAYS: i64 = 30;

/// The pure forecasting pipeline with a validated configuration.
///
/// Stateless apart from its config: every call owns its working data,
/// so distinct tenants can be forecast in parallel without
/// coordination.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run the full pipeline over pre-loaded inputs.
    ///
    /// `history` and `records` must cover the same lookback window.
    pub fn run(
        &self,
        history: &DailySeries,
        records: &[SaleRecord],
        range: DateRange,
    ) -> ForecastOutcome {
        if history.is_empty() {
            return ForecastOutcome::NoHistory;
        }

        let values = history.values();
        let summary = TrendSummary::analyze(&values, &self.config);
        let profile = WeekdayProfile::from_records(records);
        let projection = project(&summary, &profile, range);

        ForecastOutcome::Ready(ForecastResult {
            forecast: projection.points,
            drop_pct: projection.drop_pct,
            alert: projection.alert,
            products: Some(by_product(records)),
            channels: Some(by_channel(records)),
            seasonality: Some(profile.factors()),
            meta: Some(metadata(&summary)),
        })
    }
}

/// Forecast service bound to a sales store.
pub struct ForecastService<S: SalesStore> {
    engine: ForecastEngine,
    store: S,
}

impl<S: SalesStore> ForecastService<S> {
    /// Create a service with the default configuration.
    pub fn new(store: S) -> Self {
        let engine = ForecastEngine {
            config: ForecastConfig::default(),
        };
        Self { engine, store }
    }

    /// Create a service with a custom configuration.
    pub fn with_config(store: S, config: ForecastConfig) -> Result<Self> {
        Ok(Self {
            engine: ForecastEngine::new(config)?,
            store,
        })
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    /// Produce a forecast for `tenant` over `[start, end]`.
    ///
    /// Data-shape problems degrade to tagged outcomes rather than
    /// errors: a tenant with no sales in the window (or an unknown
    /// tenant) yields [`ForecastOutcome::NoHistory`], unparseable dates
    /// yield [`ForecastOutcome::InvalidRange`]. Only collaborator
    /// failures propagate as `Err`.
    pub fn forecast(&self, tenant: &str, start: &str, end: &str) -> Result<ForecastOutcome> {
        let lookback = self.engine.config().lookback_days;

        let history = self.store.daily_totals(tenant, lookback)?;
        if history.is_empty() {
            debug!(tenant, lookback, "no sales history in lookback window");
            return Ok(ForecastOutcome::NoHistory);
        }

        let range = match DateRange::parse(start, end) {
            Ok(range) => range,
            Err(ForecastError::InvalidDateRange(reason)) => {
                debug!(tenant, %reason, "unparseable forecast range");
                return Ok(ForecastOutcome::InvalidRange(reason));
            }
            Err(other) => return Err(other),
        };

        let records = self.store.records(tenant, lookback)?;
        debug!(
            tenant,
            history_days = history.len(),
            records = records.len(),
            horizon_days = range.num_days(),
            "running forecast pipeline"
        );

        Ok(self.engine.run(&history, &records, range))
    }
}

/// Apply the calling-layer defaults to an optional date range: missing
/// start becomes `today`, missing end becomes `today + 30` days.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> (String, String) {
    let start = start
        .map(str::to_string)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    let end = end.map(str::to_string).unwrap_or_else(|| {
        (today + Duration::days(DEFAULT_HORIZON_DAYS))
            .format("%Y-%m-%d")
            .to_string()
    });
    (start, end)
}
