// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = trailing mean, upper/lower = mean ± k·σ.  The whole triple is
// derived from a single window stat, so the three values are defined together
// or not at all — a warm-up gap is never zero-filled.

use serde::{Deserialize, Serialize};

use crate::indicators::rolling::WindowStat;

/// One bar's Bollinger band triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub mid: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Derive the band triple from a rolling window stat.
///
/// `None` in => `None` out.
pub fn bands(stat: Option<WindowStat>, multiplier: f64) -> Option<BollingerBands> {
    let stat = stat?;
    Some(BollingerBands {
        mid: stat.mean,
        upper: stat.mean + multiplier * stat.stddev,
        lower: stat.mean - multiplier * stat.stddev,
    })
}
