//! Statistical primitives over daily sales values.
//!
//! Pure functions over numeric slices; the projection pipeline composes
//! these into trend, smoothing, and anomaly signals.

/// Calculate the arithmetic mean of a slice.
///
/// Returns `NaN` for an empty slice; callers guard before dividing.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population standard deviation (divide by N).
///
/// Returns 0.0 for slices with fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Ordinary least squares of `values` against index positions `0..n`.
///
/// Returns `(slope, intercept)`. With fewer than two points the slope is
/// 0.0 and the intercept is the single value (or 0.0 when empty). A zero
/// index variance also yields a 0.0 slope rather than dividing by zero.
pub fn linear_trend(values: &[f64]) -> (f64, f64) {
    if values.len() < 2 {
        return (0.0, values.first().copied().unwrap_or(0.0));
    }

    let n = values.len();
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    let slope = if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    };
    let intercept = y_mean - slope * x_mean;

    (slope, intercept)
}

/// Trailing moving average with a window that shrinks near the start.
///
/// Position `i` averages `values[max(0, i-window+1)..=i]`, so the output
/// has the same length as the input and `out[0] == values[0]`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut ma = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let span = &values[start..=i];
        ma.push(span.iter().sum::<f64>() / span.len() as f64);
    }
    ma
}

/// Percentage (0-100) of values whose absolute deviation from the mean
/// exceeds `threshold` standard deviations.
///
/// Returns 0.0 when there are fewer than two values or the deviation is
/// zero.
pub fn anomaly_ratio(values: &[f64], threshold: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let sd = std_dev(values);
    if sd == 0.0 {
        return 0.0;
    }

    let anomalies = values.iter().filter(|v| (*v - m).abs() > threshold * sd).count();
    anomalies as f64 / values.len() as f64 * 100.0
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
