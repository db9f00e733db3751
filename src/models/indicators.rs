use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV bar. Indicator calculations read the close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// GMMA band matrices: one EMA series per period, ordered as the period
/// constants, each aligned to the input series (oldest bar first).
///
/// Entries before a series' period is reachable hold `0.0` as a warm-up
/// placeholder. That value is not a price; callers must skip the first
/// `period - 1` entries of each series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmmaIndicator {
    pub trader: Vec<Vec<f64>>,
    pub investor: Vec<Vec<f64>>,
}

impl GmmaIndicator {
    /// Number of bars covered, taken from the first trader series.
    pub fn len(&self) -> usize {
        self.trader.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
