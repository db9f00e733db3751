//! Main GMMA evaluation engine combining the band calculation with both
//! signal passes.

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::gmma::{calculate_gmma, calculate_gmma_from_prices};
use crate::models::indicators::{Candle, GmmaIndicator};
use crate::models::signal::{GmmaEvaluation, TrendChange, TrendDirection};
use crate::signals::spread::detect_spread_signals;
use crate::signals::trend_change::detect_trend_changes;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate GMMA signals from candles.
    pub fn evaluate(candles: &[Candle]) -> Result<GmmaEvaluation, IndicatorError> {
        Ok(Self::evaluate_bands(&calculate_gmma(candles)?))
    }

    /// Evaluate GMMA signals from a raw close-price series.
    pub fn evaluate_prices(prices: &[f64]) -> Result<GmmaEvaluation, IndicatorError> {
        Ok(Self::evaluate_bands(&calculate_gmma_from_prices(prices)?))
    }

    /// Evaluate and also return the computed bands (for API responses or
    /// debugging).
    pub fn evaluate_with_bands(
        candles: &[Candle],
    ) -> Result<(GmmaEvaluation, GmmaIndicator), IndicatorError> {
        let gmma = calculate_gmma(candles)?;
        let evaluation = Self::evaluate_bands(&gmma);
        Ok((evaluation, gmma))
    }

    /// Run both signal passes over already-computed bands.
    pub fn evaluate_bands(gmma: &GmmaIndicator) -> GmmaEvaluation {
        let signals = detect_spread_signals(gmma);
        let trend_changes = detect_trend_changes(gmma);

        let last = gmma.len().checked_sub(1);
        let compressed = last.map_or(false, |i| signals.compression[i]);
        let expanding = last.map_or(false, |i| signals.expansion[i]);
        let bullish = last.map_or(false, |i| signals.bullish[i]);
        let bearish = last.map_or(false, |i| signals.bearish[i]);

        let last_trend_change = trend_changes
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &change)| change != 0)
            .map(|(index, &change)| TrendChange {
                index,
                direction: if change > 0 {
                    TrendDirection::Bullish
                } else {
                    TrendDirection::Bearish
                },
            });

        debug!(bars = gmma.len(), bullish, bearish, "evaluated GMMA signals");

        GmmaEvaluation {
            signals,
            trend_changes,
            compressed,
            expanding,
            bullish,
            bearish,
            last_trend_change,
        }
    }
}
