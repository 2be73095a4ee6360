// =============================================================================
// Quant Suite — indicator computation core
// =============================================================================
//
// Pure, synchronous computation of the classic chart-overlay indicators
// (9-period moving average, 20-period/2σ Bollinger bands, 14-period Wilder
// RSI, per-bar volume direction) over an ordered OHLCV bar series.
//
// The crate performs no I/O: an external ingestion collaborator supplies the
// `BarSeries` (already sorted, fixed granularity) and an external renderer
// consumes the emitted `IndicatorRecord` rows. Every warm-up gap is carried
// as an explicit `None` rather than a NaN sentinel, and the pipeline trims
// the leading rows so consumers only ever see fully-defined records.
// =============================================================================

pub mod config;
pub mod indicators;
pub mod pipeline;
pub mod series;

pub use config::IndicatorConfig;
pub use indicators::bollinger::BollingerBands;
pub use indicators::rsi::WilderRsi;
pub use indicators::volume::VolumeDirection;
pub use pipeline::IndicatorRecord;
pub use series::{Bar, BarSeries, SeriesError};
