//! Personal data retention configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted retention period (one hundred years).
pub const MAX_RETENTION_DAYS: u32 = 36_500;

/// Longest accepted gap between sweeps (one year).
pub const MAX_SWEEP_INTERVAL_HOURS: u64 = 8_760;

/// Controls anonymization of soft-deleted customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdprConfig {
    /// Days a soft-deleted customer keeps personal data.
    #[serde(default = "default_retention_days")]
    pub data_retention_days: u32,
    /// Whether the retention sweep runs at all.
    #[serde(default = "default_true")]
    pub enable_anonymization: bool,
    /// Hours between retention sweeps.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_hours: u64,
}

impl Default for GdprConfig {
    fn default() -> Self {
        Self {
            data_retention_days: default_retention_days(),
            enable_anonymization: default_true(),
            sweep_interval_hours: default_sweep_interval(),
        }
    }
}

fn default_retention_days() -> u32 {
    2555
}

fn default_true() -> bool {
    true
}

fn default_sweep_interval() -> u64 {
    24
}
