//! Unit tests for trend change detection

use guppytrix::indicators::trend::calculate_gmma_from_prices;
use guppytrix::models::indicators::GmmaIndicator;
use guppytrix::signals::detect_trend_changes;

fn bands(trader: Vec<Vec<f64>>, investor: Vec<Vec<f64>>) -> GmmaIndicator {
    GmmaIndicator { trader, investor }
}

#[test]
fn test_index_zero_is_always_zero() {
    let gmma = bands(vec![vec![5.0, 7.0]], vec![vec![6.0, 6.0]]);
    let changes = detect_trend_changes(&gmma);
    assert_eq!(changes[0], 0);
}

#[test]
fn test_no_cross_yields_all_zero() {
    let gmma = bands(
        vec![vec![10.0, 11.0, 12.0]],
        vec![vec![5.0, 5.0, 5.0]],
    );
    assert_eq!(detect_trend_changes(&gmma), vec![0, 0, 0]);
}

#[test]
fn test_bullish_cross() {
    let gmma = bands(vec![vec![5.0, 7.0]], vec![vec![6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, 1]);
}

#[test]
fn test_bearish_cross() {
    let gmma = bands(vec![vec![7.0, 5.0]], vec![vec![6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, -1]);
}

#[test]
fn test_tie_on_previous_bar_counts_as_transition() {
    let gmma = bands(vec![vec![6.0, 7.0]], vec![vec![6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, 1]);

    let gmma = bands(vec![vec![6.0, 5.0]], vec![vec![6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, -1]);
}

#[test]
fn test_tie_on_current_bar_is_no_signal() {
    let gmma = bands(vec![vec![5.0, 6.0]], vec![vec![6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, 0]);
}

#[test]
fn test_persistent_tie_is_no_signal() {
    let gmma = bands(vec![vec![6.0, 6.0, 6.0]], vec![vec![6.0, 6.0, 6.0]]);
    assert_eq!(detect_trend_changes(&gmma), vec![0, 0, 0]);
}

#[test]
fn test_round_trip_cross() {
    let gmma = bands(
        vec![vec![5.0, 7.0, 7.0, 4.0]],
        vec![vec![6.0, 6.0, 6.0, 6.0]],
    );
    assert_eq!(detect_trend_changes(&gmma), vec![0, 1, 0, -1]);
}

#[test]
fn test_averages_across_multiple_series() {
    // Trader average moves 5 -> 7 while individual series straddle the
    // investor average on both bars.
    let gmma = bands(
        vec![vec![2.0, 10.0], vec![8.0, 4.0]],
        vec![vec![6.0, 6.0], vec![6.0, 6.0]],
    );
    assert_eq!(detect_trend_changes(&gmma), vec![0, 1]);
}

#[test]
fn test_ascending_scenario_crosses_once_at_first_seed() {
    // The investor band stays at its placeholder zeros, so the trader
    // average crosses it the moment the period-3 seed lands at index 2.
    let prices: Vec<f64> = (10..=20).map(f64::from).collect();
    let gmma = calculate_gmma_from_prices(&prices).unwrap();
    let changes = detect_trend_changes(&gmma);

    assert_eq!(changes.len(), 11);
    assert_eq!(changes[2], 1);
    let crossings: Vec<_> = changes.iter().filter(|&&c| c != 0).collect();
    assert_eq!(crossings.len(), 1);
}
