//! Band spread dynamics: compression, expansion, and full separation.

use crate::models::indicators::GmmaIndicator;
use crate::models::signal::SpreadSignals;

/// Minimum and maximum EMA value across one band at a given bar.
fn band_extremes(band: &[Vec<f64>], index: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in band {
        let value = series[index];
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

/// Detect spread compression/expansion and full band separation.
///
/// Compression fires when both bands tighten against the previous bar,
/// expansion when both widen. Bullish means the lowest trader EMA sits
/// above the highest investor EMA; bearish is the mirror. Warm-up
/// placeholder zeros participate in the comparisons as plain numbers, so
/// partially seeded bands rarely separate.
///
/// All vectors align to the input series; index 0 has no previous bar
/// and stays `false`.
pub fn detect_spread_signals(gmma: &GmmaIndicator) -> SpreadSignals {
    let len = gmma.len();
    let mut signals = SpreadSignals {
        compression: vec![false; len],
        expansion: vec![false; len],
        bullish: vec![false; len],
        bearish: vec![false; len],
    };

    for i in 1..len {
        let (trader_min, trader_max) = band_extremes(&gmma.trader, i);
        let (prev_trader_min, prev_trader_max) = band_extremes(&gmma.trader, i - 1);
        let (investor_min, investor_max) = band_extremes(&gmma.investor, i);
        let (prev_investor_min, prev_investor_max) = band_extremes(&gmma.investor, i - 1);

        let trader_spread = trader_max - trader_min;
        let prev_trader_spread = prev_trader_max - prev_trader_min;
        let investor_spread = investor_max - investor_min;
        let prev_investor_spread = prev_investor_max - prev_investor_min;

        signals.compression[i] =
            trader_spread < prev_trader_spread && investor_spread < prev_investor_spread;
        signals.expansion[i] =
            trader_spread > prev_trader_spread && investor_spread > prev_investor_spread;
        signals.bullish[i] = trader_min > investor_max;
        signals.bearish[i] = trader_max < investor_min;
    }

    signals
}
