use serde::{Deserialize, Serialize};

/// Direction of a trader/investor average crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

/// Per-bar spread and separation signals, index-aligned to the input
/// series.
///
/// Index 0 never carries a signal: every condition compares against the
/// previous bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadSignals {
    /// Both bands tightening at once.
    pub compression: Vec<bool>,
    /// Both bands widening at once.
    pub expansion: Vec<bool>,
    /// Every trader EMA above every investor EMA.
    pub bullish: Vec<bool>,
    /// Every trader EMA below every investor EMA.
    pub bearish: Vec<bool>,
}

/// A single crossover of the trader average through the investor average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendChange {
    pub index: usize,
    pub direction: TrendDirection,
}

/// Full evaluation output: the per-bar signal vectors plus the latest
/// bar's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmmaEvaluation {
    pub signals: SpreadSignals,
    /// `1` bullish crossover, `-1` bearish crossover, `0` otherwise.
    pub trend_changes: Vec<i32>,
    pub compressed: bool,
    pub expanding: bool,
    pub bullish: bool,
    pub bearish: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trend_change: Option<TrendChange>,
}
