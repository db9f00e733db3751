//! Trend indicators: EMA, GMMA

pub mod ema;
pub mod gmma;

pub use ema::*;
pub use gmma::*;
