//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the full EMA series for a period.
///
/// Output has the same length as the input. The first `period - 1`
/// entries are `0.0` placeholders (the EMA is not yet computable there);
/// the entry at `period - 1` is the SMA seed over the first `period`
/// values; later entries follow the recurrence
/// `ema = (value - ema) * multiplier + ema` with
/// `multiplier = 2 / (period + 1)`.
///
/// Inputs shorter than `period` are legal and yield an all-placeholder
/// series.
pub fn calculate_ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let seed = match math::sma(values, period) {
        Some(seed) => seed,
        None => return vec![0.0; values.len()],
    };

    let multiplier = math::ema_multiplier(period);
    let mut series = vec![0.0; period - 1];
    series.push(seed);

    let mut ema = seed;
    for &value in &values[period..] {
        ema = math::ema_from_previous(value, ema, multiplier);
        series.push(ema);
    }

    series
}
