// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free building blocks for the indicator pipeline.  Every
// per-bar result is an `Option<T>` so callers are forced to handle the
// warm-up window and numerical edge cases explicitly — a `None` always means
// "insufficient history", never "zero".

pub mod bollinger;
pub mod rolling;
pub mod rsi;
pub mod volume;
