// =============================================================================
// Rolling Window Statistics
// =============================================================================
//
// Trailing fixed-window mean and standard deviation over one extracted column
// of a bar series.  This is the shared engine behind the 9-period moving
// average (mean only) and the 20-period Bollinger input (mean + stddev).
//
// The standard deviation is the population form (divide by the window size),
// and every window is recomputed from the raw values: an incremental
// running-sum scheme would be cheaper but can drift over long series.
// =============================================================================

use crate::series::{Bar, BarSeries};

/// Mean and standard deviation of one fully-populated trailing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStat {
    pub mean: f64,
    pub stddev: f64,
}

/// Fixed-window rolling statistics over a single bar column.
///
/// Parameterised by the window size and a column extractor (usually the
/// close price).  A window of `w` bars produces its first value at index
/// `w - 1`; everything before that is `None`.
pub struct RollingStats<F> {
    window: usize,
    extract: F,
}

impl<F> RollingStats<F>
where
    F: Fn(&Bar) -> f64,
{
    pub fn new(window: usize, extract: F) -> Self {
        Self { window, extract }
    }

    /// Compute per-bar window stats, aligned one-to-one with the input.
    ///
    /// # Edge cases
    /// - `window == 0` => all `None` (a zero-width window has no mean)
    /// - `window > series.len()` => all `None`
    pub fn compute(&self, series: &BarSeries) -> Vec<Option<WindowStat>> {
        let mut out = vec![None; series.len()];
        if self.window == 0 || series.len() < self.window {
            return out;
        }

        let values: Vec<f64> = series.iter().map(&self.extract).collect();
        let divisor = self.window as f64;

        for (start, window) in values.windows(self.window).enumerate() {
            let mean = window.iter().sum::<f64>() / divisor;
            let variance =
                window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / divisor;
            out[start + self.window - 1] = Some(WindowStat {
                mean,
                stddev: variance.sqrt(),
            });
        }

        out
    }
}
