//! End-to-end forecast scenarios against the in-memory store.

use chrono::{Duration, NaiveDate};
use sales_forecast::core::TrendLabel;
use sales_forecast::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 15 consecutive days starting 2025-01-01 with amount = 100 + 10*i,
/// all on product "A" via channel "Online".
fn linear_ramp_store() -> MemorySalesStore {
    let mut store = MemorySalesStore::new(day(2025, 1, 16));
    for i in 0..15i64 {
        store.insert(
            "acme",
            SaleRecord::new(
                day(2025, 1, 1) + Duration::days(i),
                100.0 + 10.0 * i as f64,
                "A",
                "Online",
            ),
        );
    }
    store
}

#[test]
fn rising_tenant_gets_an_upward_three_day_forecast() {
    let service = ForecastService::new(linear_ramp_store());
    let outcome = service.forecast("acme", "2025-02-01", "2025-02-03").unwrap();

    let result = outcome.as_ready().expect("forecast should be produced");
    assert_eq!(result.forecast.len(), 3);

    let meta = result.meta.as_ref().unwrap();
    assert_eq!(meta.trend, TrendLabel::Up);
    assert!(meta.confidence >= 0.0 && meta.confidence <= 1.0);
    assert_eq!(meta.model, "trend_seasonal_blend");

    let products = result.products.as_deref().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "A");
    assert!((products[0].pct - 100.0).abs() < 1e-9);
}

#[test]
fn forecast_length_matches_the_inclusive_range() {
    let service = ForecastService::new(linear_ramp_store());

    let month = service
        .forecast("acme", "2025-02-01", "2025-03-02")
        .unwrap()
        .into_payload();
    assert_eq!(month.forecast.len(), 30);

    let single = service
        .forecast("acme", "2025-02-01", "2025-02-01")
        .unwrap()
        .into_payload();
    assert_eq!(single.forecast.len(), 1);
}

#[test]
fn amounts_stay_inside_the_clamp_band() {
    let service = ForecastService::new(linear_ramp_store());
    let result = service
        .forecast("acme", "2025-02-01", "2025-06-30")
        .unwrap()
        .into_payload();

    // Historical average of the ramp is 170.
    let (floor, cap) = (170.0 * 0.6, 170.0 * 1.6);
    assert!(!result.forecast.is_empty());
    for point in &result.forecast {
        assert!(point.expected_amount >= floor - 1e-9, "below floor: {point:?}");
        assert!(point.expected_amount <= cap + 1e-9, "above cap: {point:?}");
    }
}

#[test]
fn zero_sales_tenant_gets_the_empty_payload() {
    let service = ForecastService::new(MemorySalesStore::new(day(2025, 1, 16)));
    let outcome = service.forecast("ghost", "2025-02-01", "2025-02-03").unwrap();

    assert_eq!(outcome, ForecastOutcome::NoHistory);
    let payload = outcome.into_payload();
    assert!(payload.forecast.is_empty());
    assert_eq!(payload.drop_pct, 0.0);
    assert_eq!(payload.alert, 0.0);
    assert!(payload.products.is_none());
    assert!(payload.channels.is_none());
    assert!(payload.seasonality.is_none());
    assert!(payload.meta.is_none());
}

#[test]
fn unparseable_dates_get_the_same_empty_shape() {
    let service = ForecastService::new(linear_ramp_store());
    let outcome = service.forecast("acme", "not-a-date", "2025-02-03").unwrap();

    assert!(matches!(outcome, ForecastOutcome::InvalidRange(_)));
    assert_eq!(outcome.into_payload(), ForecastResult::empty());
}

#[test]
fn inverted_range_keeps_the_analytical_sections() {
    let service = ForecastService::new(linear_ramp_store());
    let result = service
        .forecast("acme", "2025-02-10", "2025-02-01")
        .unwrap()
        .into_payload();

    assert!(result.forecast.is_empty());
    assert_eq!(result.drop_pct, 0.0);
    assert!(result.products.is_some());
    assert!(result.channels.is_some());
    assert_eq!(result.seasonality.as_deref().unwrap().len(), 7);
    assert!(result.meta.is_some());
}

#[test]
fn repeated_requests_are_byte_identical() {
    let service = ForecastService::new(linear_ramp_store());
    let first = service
        .forecast("acme", "2025-02-01", "2025-02-28")
        .unwrap()
        .into_payload();
    let second = service
        .forecast("acme", "2025-02-01", "2025-02-28")
        .unwrap()
        .into_payload();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn mixed_segments_report_complete_breakdowns() {
    let mut store = MemorySalesStore::new(day(2025, 1, 16));
    store.extend(
        "shop",
        vec![
            SaleRecord::new(day(2025, 1, 2), 600.0, "Laptop", "Online"),
            SaleRecord::new(day(2025, 1, 3), 300.0, "Tablet", "Online"),
            SaleRecord::new(day(2025, 1, 4), 100.0, "Mouse", "Store"),
        ],
    );

    let service = ForecastService::new(store);
    let result = service
        .forecast("shop", "2025-02-01", "2025-02-07")
        .unwrap()
        .into_payload();

    let products = result.products.as_deref().unwrap();
    assert_eq!(products.len(), 3);
    let pct_sum: f64 = products.iter().map(|p| p.pct).sum();
    assert!((pct_sum - 100.0).abs() < 1e-9);

    let channels = result.channels.as_deref().unwrap();
    assert_eq!(channels.len(), 2);
    let online = channels.iter().find(|c| c.name == "Online").unwrap();
    assert!((online.pct - 90.0).abs() < 1e-9);

    // Seasonality always covers the full week, even for 3 sale days.
    assert_eq!(result.seasonality.as_deref().unwrap().len(), 7);
}

#[test]
fn serialized_payload_matches_the_wire_contract() {
    let service = ForecastService::new(linear_ramp_store());
    let result = service
        .forecast("acme", "2025-02-01", "2025-02-03")
        .unwrap()
        .into_payload();

    let json = serde_json::to_value(&result).unwrap();

    let first_point = &json["forecast"][0];
    assert_eq!(first_point["date"], "2025-02-01");
    assert!(first_point["expected_amount"].is_number());

    assert!(json["drop_pct"].is_number());
    assert!(json["alert"].is_number());

    let product = &json["products"][0];
    for field in ["name", "total", "count", "avg", "pct"] {
        assert!(!product[field].is_null(), "missing product field {field}");
    }

    let factor = &json["seasonality"][0];
    assert!(factor["day"].is_string());
    assert!(factor["factor"].is_number());

    let meta = &json["meta"];
    assert_eq!(meta["trend"], "up");
    assert_eq!(meta["model"], "trend_seasonal_blend");
    assert!(meta["historical_avg"].is_number());
    assert!(meta["std_dev"].is_number());
    assert!(meta["confidence"].is_number());
}

#[test]
fn empty_payload_serializes_sections_as_null() {
    let json = serde_json::to_value(ForecastResult::empty()).unwrap();
    assert_eq!(json["forecast"].as_array().unwrap().len(), 0);
    assert!(json["products"].is_null());
    assert!(json["channels"].is_null());
    assert!(json["seasonality"].is_null());
    assert!(json["meta"].is_null());
}

#[test]
fn default_range_resolution_spans_thirty_days() {
    let today = day(2025, 1, 16);
    let (start, end) = resolve_range(None, None, today);
    assert_eq!(start, "2025-01-16");
    assert_eq!(end, "2025-02-15");

    let service = ForecastService::new(linear_ramp_store());
    let result = service
        .forecast("acme", &start, &end)
        .unwrap()
        .into_payload();
    assert_eq!(result.forecast.len(), 31);
}
