// =============================================================================
// Bar Series — ordered OHLCV container
// =============================================================================
//
// The shared input data model for the indicator pipeline. A `BarSeries` is
// append-only: bars arrive pre-sorted from the ingestion side, and the series
// rejects anything that does not strictly advance the clock. A misordered
// series would silently misalign every rolling window downstream, so the
// whole series is refused instead of being re-sorted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single OHLCV price bar at a fixed intraday granularity.
///
/// High/low consistency (`high >= max(open, close)` and the mirror on the
/// low side) is the ingestion side's contract and is not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Errors raised while building a [`BarSeries`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// A bar's timestamp does not strictly advance past its predecessor.
    #[error("out-of-order bar at index {index}: {current} does not advance past {previous}")]
    OutOfOrderData {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
}

/// Ordered, append-only sequence of bars with strictly increasing timestamps.
///
/// Insertion order is chronological order. Once handed to the pipeline the
/// series is read-only; there is no removal or in-place update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self { bars: Vec::new() }
    }

    /// Build a series from pre-collected bars, validating chronological
    /// order. The first out-of-order bar rejects the whole input.
    pub fn from_bars(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        let mut series = Self {
            bars: Vec::with_capacity(bars.len()),
        };
        for bar in bars {
            series.push(bar)?;
        }
        Ok(series)
    }

    /// Append one bar.
    ///
    /// Fails with [`SeriesError::OutOfOrderData`] when the timestamp does not
    /// strictly increase (duplicates count as out of order).
    pub fn push(&mut self, bar: Bar) -> Result<(), SeriesError> {
        if let Some(last) = self.bars.last() {
            if bar.timestamp <= last.timestamp {
                return Err(SeriesError::OutOfOrderData {
                    index: self.bars.len(),
                    previous: last.timestamp,
                    current: bar.timestamp,
                });
            }
        }
        self.bars.push(bar);
        Ok(())
    }

    /// Random access by index.
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The bars as a slice, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// Close-price column (the input to most indicator computations).
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
