// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Step 1 — decompose each close-to-close delta into a gain and a loss.
// Step 2 — warm up: collect the first `period` gain/loss samples and seed the
//          smoothed averages with their simple mean.
// Step 3 — steady state: Wilder's exponential smoothing with alpha = 1/period:
//            avg = avg + alpha * (sample - avg)
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// A zero smoothed loss yields *no* RSI value rather than a clamp to 100: the
// effective window carried no down-moves, which is treated as insufficient
// signal instead of a saturated reading.
// =============================================================================

/// Smoothing phase of a [`WilderRsi`] engine.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// No close has been seen yet.
    Uninitialized,
    /// Collecting the first `period` gain/loss samples.
    Warming {
        gain_sum: f64,
        loss_sum: f64,
        samples: usize,
    },
    /// Seeded; every further bar updates the smoothed averages.
    Steady { avg_gain: f64, avg_loss: f64 },
}

/// Stateful Wilder RSI engine.
///
/// One instance serves exactly one series; there is no reset — construct a
/// fresh engine for the next series.  With period `p` the engine emits its
/// first value at bar index `p` (the deltas at indices `1..=p` seed the
/// averages), and `None` for every bar before that.
#[derive(Debug, Clone)]
pub struct WilderRsi {
    period: usize,
    prev_close: Option<f64>,
    state: State,
}

impl WilderRsi {
    /// Create an engine with the given smoothing period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prev_close: None,
            state: State::Uninitialized,
        }
    }

    /// Feed the next close price and return the RSI at that bar.
    ///
    /// # Edge cases
    /// - `period == 0` => always `None` (the recursion cannot be seeded)
    /// - warm-up (fewer than `period` deltas seen) => `None`
    /// - smoothed loss == 0 => `None`, never 100
    pub fn update(&mut self, close: f64) -> Option<f64> {
        if self.period == 0 {
            return None;
        }

        let prev = match self.prev_close.replace(close) {
            Some(prev) => prev,
            None => {
                // First bar: no delta exists yet, start collecting.
                self.state = State::Warming {
                    gain_sum: 0.0,
                    loss_sum: 0.0,
                    samples: 0,
                };
                return None;
            }
        };

        let delta = close - prev;
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        match &mut self.state {
            // A delta cannot exist before two closes have been seen; the
            // prev_close gate above moves the engine to Warming first.
            State::Uninitialized => None,
            State::Warming {
                gain_sum,
                loss_sum,
                samples,
            } => {
                *gain_sum += gain;
                *loss_sum += loss;
                *samples += 1;
                if *samples < self.period {
                    return None;
                }
                // Simple-average seed over the first `period` samples.
                let avg_gain = *gain_sum / self.period as f64;
                let avg_loss = *loss_sum / self.period as f64;
                self.state = State::Steady { avg_gain, avg_loss };
                rsi_value(avg_gain, avg_loss)
            }
            State::Steady { avg_gain, avg_loss } => {
                let alpha = 1.0 / self.period as f64;
                *avg_gain += alpha * (gain - *avg_gain);
                *avg_loss += alpha * (loss - *avg_loss);
                rsi_value(*avg_gain, *avg_loss)
            }
        }
    }
}

/// Compute the full aligned RSI series for `closes`: one slot per input bar,
/// `None` through the warm-up and wherever the smoothed loss is zero.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut engine = WilderRsi::new(period);
    closes.iter().map(|&close| engine.update(close)).collect()
}

/// Convert smoothed averages into an RSI value, or `None` when the loss side
/// is zero.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return None;
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
