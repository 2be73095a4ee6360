// =============================================================================
// Indicator Pipeline — per-bar record assembly and warm-up trimming
// =============================================================================
//
// Runs every indicator engine exactly once over the full series, zips the
// aligned per-bar results into records, and drops the leading rows where at
// least one indicator is still warming up.  The first emitted row is the
// first index at which the moving average, the Bollinger bands and the RSI
// are all simultaneously defined; the remainder is emitted unchanged.
//
// A series too short (or too one-sided) to ever reach a fully-defined row
// produces an empty result, not an error — "no data yet" is a valid state
// and the caller decides what to do with it.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::bollinger::{self, BollingerBands};
use crate::indicators::rolling::RollingStats;
use crate::indicators::rsi;
use crate::indicators::volume::{self, VolumeDirection};
use crate::series::{Bar, BarSeries};

/// One output row: the source bar enriched with every indicator.
///
/// Created once by the pipeline and immutable thereafter; the external
/// renderer consumes these as-is (the bar fields are flattened into the
/// serialised form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    #[serde(flatten)]
    pub bar: Bar,
    pub moving_average: Option<f64>,
    pub bollinger: Option<BollingerBands>,
    pub rsi: Option<f64>,
    pub volume_direction: VolumeDirection,
}

/// Run the indicator pipeline over a bar series.
///
/// Each component runs once over the whole series (never re-invoked per
/// row), keeping the total cost linear in the input length.  Running twice
/// on the same series yields identical output — the engines hold no state
/// across invocations.
pub fn run(series: &BarSeries, config: &IndicatorConfig) -> Vec<IndicatorRecord> {
    if series.is_empty() {
        debug!("empty series -- nothing to compute");
        return Vec::new();
    }

    let ma = RollingStats::new(config.ma_window, |b: &Bar| b.close).compute(series);
    let bb_stats = RollingStats::new(config.bb_window, |b: &Bar| b.close).compute(series);
    let closes = series.closes();
    let rsi_values = rsi::rsi_series(&closes, config.rsi_period);

    let mut records: Vec<IndicatorRecord> = Vec::with_capacity(series.len());
    for (i, bar) in series.iter().enumerate() {
        records.push(IndicatorRecord {
            bar: bar.clone(),
            moving_average: ma[i].map(|stat| stat.mean),
            bollinger: bollinger::bands(bb_stats[i], config.bb_multiplier),
            rsi: rsi_values[i],
            volume_direction: volume::classify(bar),
        });
    }

    // Trim: drop leading rows until every indicator is defined at once.
    let first_complete = records.iter().position(|r| {
        r.moving_average.is_some() && r.bollinger.is_some() && r.rsi.is_some()
    });

    match first_complete {
        Some(offset) => {
            debug!(
                bars = series.len(),
                trimmed = offset,
                emitted = series.len() - offset,
                "indicator pipeline complete"
            );
            records.split_off(offset)
        }
        None => {
            debug!(
                bars = series.len(),
                "no fully-defined row -- emitting empty result"
            );
            Vec::new()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bar(minute: i64, open: f64, close: f64) -> Bar {
        Bar {
            timestamp: Utc.timestamp_opt(minute * 60, 0).unwrap(),
            open,
            high: open.max(close) + 1.0,
            low: open.min(close) - 1.0,
            close,
            volume: 100,
        }
    }

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| bar(i as i64, close, close))
            .collect();
        BarSeries::from_bars(bars).unwrap()
    }

    /// Closes alternating +1/-1 — every indicator defines as early as its
    /// window allows on this input.
    fn alternating_closes(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect()
    }

    #[test]
    fn empty_series_yields_empty_output() {
        let series = BarSeries::new();
        assert!(run(&series, &IndicatorConfig::default()).is_empty());
    }

    #[test]
    fn series_shorter_than_the_bollinger_window_yields_empty_output() {
        let series = series_from_closes(&alternating_closes(19));
        assert!(run(&series, &IndicatorConfig::default()).is_empty());
    }

    #[test]
    fn first_row_appears_once_the_widest_window_fills() {
        // With defaults the Bollinger window dominates: the moving average is
        // defined from index 8, the RSI from index 14, the bands from index
        // 19 — so the first emitted row is input index 19.
        let series = series_from_closes(&alternating_closes(40));
        let records = run(&series, &IndicatorConfig::default());
        assert_eq!(records.len(), 40 - 19);
        assert_eq!(records[0].bar.timestamp, series.get(19).unwrap().timestamp);
    }

    #[test]
    fn every_emitted_row_is_fully_defined() {
        let series = series_from_closes(&alternating_closes(60));
        let records = run(&series, &IndicatorConfig::default());
        assert!(!records.is_empty());
        for r in &records {
            assert!(r.moving_average.is_some());
            assert!(r.bollinger.is_some());
            let rsi = r.rsi.expect("rsi defined on two-sided input");
            assert!((0.0..=100.0).contains(&rsi));
        }
    }

    #[test]
    fn constant_prices_collapse_the_bands_and_suppress_rsi() {
        // Zero stddev everywhere and no down-moves: the bands would collapse
        // onto the mid line, but the RSI never defines, so no row is ever
        // complete and the pipeline stays empty.
        let series = series_from_closes(&vec![100.0; 50]);
        assert!(run(&series, &IndicatorConfig::default()).is_empty());
    }

    #[test]
    fn strictly_rising_prices_yield_empty_output() {
        // The smoothed loss stays zero, the RSI never defines.
        let closes: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        let series = series_from_closes(&closes);
        assert!(run(&series, &IndicatorConfig::default()).is_empty());
    }

    #[test]
    fn trim_scans_past_the_window_boundary_when_rsi_defines_late() {
        // 30 rising closes keep the RSI undefined; the first down-move at
        // index 30 finally defines it, and that is where the output starts
        // even though the rolling windows filled long before.
        let mut closes: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        for i in 0..6 {
            closes.push(if i % 2 == 0 { 29.0 } else { 30.0 });
        }
        let series = series_from_closes(&closes);
        let records = run(&series, &IndicatorConfig::default());
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].bar.timestamp, series.get(30).unwrap().timestamp);
        assert!(records[0].rsi.is_some());
    }

    #[test]
    fn bands_straddle_the_mid_line() {
        let series = series_from_closes(&alternating_closes(40));
        let records = run(&series, &IndicatorConfig::default());
        for r in &records {
            let bb = r.bollinger.unwrap();
            assert!(bb.upper > bb.mid);
            assert!(bb.lower < bb.mid);
            assert!((bb.upper - bb.mid - (bb.mid - bb.lower)).abs() < 1e-9);
        }
    }

    #[test]
    fn running_twice_yields_identical_output() {
        let series = series_from_closes(&alternating_closes(45));
        let cfg = IndicatorConfig::default();
        assert_eq!(run(&series, &cfg), run(&series, &cfg));
    }

    #[test]
    fn volume_direction_follows_the_candle_body() {
        let mut bars = Vec::new();
        for (i, &close) in alternating_closes(40).iter().enumerate() {
            // Open each bar at the midpoint so directions alternate.
            bars.push(bar(i as i64, 100.5, close));
        }
        let series = BarSeries::from_bars(bars).unwrap();
        let records = run(&series, &IndicatorConfig::default());
        assert!(!records.is_empty());
        for r in &records {
            let expected = if r.bar.close >= r.bar.open {
                VolumeDirection::Up
            } else {
                VolumeDirection::Down
            };
            assert_eq!(r.volume_direction, expected);
        }
        assert!(records.iter().any(|r| r.volume_direction == VolumeDirection::Up));
        assert!(records.iter().any(|r| r.volume_direction == VolumeDirection::Down));
    }

    #[test]
    fn record_serialises_with_flattened_bar_fields() {
        let series = series_from_closes(&alternating_closes(40));
        let records = run(&series, &IndicatorConfig::default());
        let value = serde_json::to_value(&records[0]).unwrap();

        // Bar fields sit at the top level next to the indicator fields.
        assert!(value.get("timestamp").is_some());
        assert!(value.get("open").is_some());
        assert!(value.get("close").is_some());
        assert!(value.get("volume").is_some());
        assert!(value["moving_average"].is_number());
        assert!(value["bollinger"]["mid"].is_number());
        assert!(value["rsi"].is_number());
        assert_eq!(value["volume_direction"], "Up");
    }
}
