//! Analytical components: trend/anomaly signals, weekday seasonality,
//! and product/channel segment breakdowns.

mod seasonality;
mod segments;
mod trend;

pub use seasonality::WeekdayProfile;
pub use segments::{by_channel, by_product, segment_breakdown};
pub use trend::{confidence_score, trend_label, TrendSummary};
