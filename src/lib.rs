//! # sales-forecast
//!
//! Sales forecasting engine for a multi-tenant analytics backend.
//!
//! Blends a linear trend with moving-average smoothing and day-of-week
//! seasonality to project bounded daily sales over an arbitrary future
//! window, along with product/channel breakdowns, anomaly alerts, and a
//! heuristic confidence score.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use sales_forecast::prelude::*;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
//! let mut store = MemorySalesStore::new(today);
//! for i in 0..15 {
//!     store.insert(
//!         "acme",
//!         SaleRecord::new(
//!             NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(i),
//!             100.0 + 10.0 * i as f64,
//!             "Laptop",
//!             "Online",
//!         ),
//!     );
//! }
//!
//! let service = ForecastService::new(store);
//! let outcome = service.forecast("acme", "2025-02-01", "2025-02-03").unwrap();
//! let result = outcome.into_payload();
//! assert_eq!(result.forecast.len(), 3);
//! ```

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod projector;
pub mod service;
pub mod stats;
pub mod store;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::analysis::{TrendSummary, WeekdayProfile};
    pub use crate::config::ForecastConfig;
    pub use crate::core::{
        DailySeries, DateRange, ForecastOutcome, ForecastResult, SaleRecord, TrendLabel,
    };
    pub use crate::error::{ForecastError, Result};
    pub use crate::service::{resolve_range, ForecastEngine, ForecastService};
    pub use crate::store::{MemorySalesStore, SalesStore};
}
