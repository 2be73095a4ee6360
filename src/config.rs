// =============================================================================
// Indicator Configuration
// =============================================================================
//
// Tunable parameters of the indicator pipeline.  Defaults reproduce the
// classic chart setup: 9-period moving average, 20-period/2σ Bollinger
// bands, 14-period Wilder RSI.
//
// Every field carries `#[serde(default = "...")]` so that adding new fields
// never breaks loading an older config file.  Persistence uses an atomic
// tmp + rename pattern to prevent corruption on crash.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ma_window() -> usize {
    9
}

fn default_bb_window() -> usize {
    20
}

fn default_bb_multiplier() -> f64 {
    2.0
}

fn default_rsi_period() -> usize {
    14
}

// =============================================================================
// IndicatorConfig
// =============================================================================

/// Parameters for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Moving-average look-back window (bars).
    #[serde(default = "default_ma_window")]
    pub ma_window: usize,

    /// Bollinger band look-back window (bars).
    #[serde(default = "default_bb_window")]
    pub bb_window: usize,

    /// Bollinger band width in standard deviations.
    #[serde(default = "default_bb_multiplier")]
    pub bb_multiplier: f64,

    /// Wilder RSI smoothing period (bars).
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_window: default_ma_window(),
            bb_window: default_bb_window(),
            bb_multiplier: default_bb_multiplier(),
            rsi_period: default_rsi_period(),
        }
    }
}

impl IndicatorConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read indicator config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse indicator config from {}", path.display()))?;

        info!(
            path = %path.display(),
            ma_window = config.ma_window,
            bb_window = config.bb_window,
            rsi_period = config.rsi_period,
            "indicator config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise indicator config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "indicator config saved (atomic)");
        Ok(())
    }
}
