//! GMMA (Guppy Multiple Moving Average) indicator
//!
//! Two bands of EMAs over the same series: a short-period trader group
//! and a long-period investor group. The relationship between the bands
//! drives the signal passes in `crate::signals`.

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::ema::calculate_ema_series;
use crate::models::indicators::{Candle, GmmaIndicator};

/// Short-term EMA periods (trader group).
pub const TRADER_PERIODS: [usize; 6] = [3, 5, 8, 10, 12, 15];

/// Long-term EMA periods (investor group).
pub const INVESTOR_PERIODS: [usize; 6] = [30, 35, 40, 45, 50, 60];

const MIN_DATA_POINTS: usize = 3;

/// Calculate both GMMA bands over a close-price series.
///
/// Each band holds one EMA series per period, in period order, aligned to
/// the input. Inputs shorter than a period are legal; the affected series
/// stays at its `0.0` placeholder throughout. The only rejected input is
/// a series with fewer than 3 elements.
pub fn calculate_gmma_from_prices(prices: &[f64]) -> Result<GmmaIndicator, IndicatorError> {
    if prices.len() < MIN_DATA_POINTS {
        return Err(IndicatorError::InvalidInput(
            "Data array must contain at least 3 elements".to_string(),
        ));
    }

    let trader = TRADER_PERIODS
        .iter()
        .map(|&period| calculate_ema_series(prices, period))
        .collect();
    let investor = INVESTOR_PERIODS
        .iter()
        .map(|&period| calculate_ema_series(prices, period))
        .collect();

    debug!(points = prices.len(), "calculated GMMA bands");

    Ok(GmmaIndicator { trader, investor })
}

/// Calculate GMMA over candle closes.
pub fn calculate_gmma(candles: &[Candle]) -> Result<GmmaIndicator, IndicatorError> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    calculate_gmma_from_prices(&closes)
}
