// =============================================================================
// Volume Direction
// =============================================================================
//
// Tags each bar with its price direction so the renderer can colour volume
// columns without re-deriving candle direction.  A flat bar (close == open)
// counts as `Up`.

use serde::{Deserialize, Serialize};

use crate::series::Bar;

/// Price direction of a single bar. Never undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeDirection {
    Up,
    Down,
}

impl std::fmt::Display for VolumeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
        }
    }
}

/// Classify a bar: `Up` when `close >= open`, `Down` otherwise.
pub fn classify(bar: &Bar) -> VolumeDirection {
    if bar.close >= bar.open {
        VolumeDirection::Up
    } else {
        VolumeDirection::Down
    }
}
