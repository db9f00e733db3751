//! Trend changes: trader average crossing the investor average.

use crate::models::indicators::GmmaIndicator;

/// Arithmetic mean of one band's EMA values at a given bar.
fn band_average(band: &[Vec<f64>], index: usize) -> f64 {
    band.iter().map(|series| series[index]).sum::<f64>() / band.len() as f64
}

/// Detect trader/investor average crossovers.
///
/// `1` marks a cross from at-or-below to above (turning bullish), `-1` a
/// cross from at-or-above to below (turning bearish), `0` everything
/// else. A tie on the current bar never emits a signal; a tie on the
/// previous bar counts as the "before" side of a transition. Index 0 has
/// no previous bar and stays `0`.
pub fn detect_trend_changes(gmma: &GmmaIndicator) -> Vec<i32> {
    let len = gmma.len();
    let mut changes = vec![0; len];

    for i in 1..len {
        let trader_avg = band_average(&gmma.trader, i);
        let prev_trader_avg = band_average(&gmma.trader, i - 1);
        let investor_avg = band_average(&gmma.investor, i);
        let prev_investor_avg = band_average(&gmma.investor, i - 1);

        if trader_avg > investor_avg && prev_trader_avg <= prev_investor_avg {
            changes[i] = 1;
        } else if trader_avg < investor_avg && prev_trader_avg >= prev_investor_avg {
            changes[i] = -1;
        }
    }

    changes
}
