//! Core data structures: sales inputs and the forecast output contract.

mod result;
mod sales;

pub use result::{
    ForecastMetadata, ForecastOutcome, ForecastPoint, ForecastResult, SeasonalityFactor,
    SegmentStat, TrendLabel,
};
pub use sales::{weekday_name, DailySeries, DateRange, SaleRecord};
