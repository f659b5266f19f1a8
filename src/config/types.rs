use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub survey: SurveyConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Simulated service latency per operation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_get_all_ms")]
    pub get_all_ms: u64,
    #[serde(default = "default_get_by_id_ms")]
    pub get_by_id_ms: u64,
    #[serde(default = "default_create_ms")]
    pub create_ms: u64,
    #[serde(default = "default_update_ms")]
    pub update_ms: u64,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
}

/// Screen timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Seconds the thank-you screen stays up before returning to welcome.
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u8,
    /// Seconds a toast notification stays visible.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    /// UI redraw tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Where the initial dataset comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// JSON file with seed records. The bundled dataset is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_get_all_ms() -> u64 {
    300
}

fn default_get_by_id_ms() -> u64 {
    200
}

fn default_create_ms() -> u64 {
    400
}

fn default_update_ms() -> u64 {
    350
}

fn default_delete_ms() -> u64 {
    250
}

fn default_countdown_seconds() -> u8 {
    5
}

fn default_toast_seconds() -> u64 {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            get_all_ms: default_get_all_ms(),
            get_by_id_ms: default_get_by_id_ms(),
            create_ms: default_create_ms(),
            update_ms: default_update_ms(),
            delete_ms: default_delete_ms(),
        }
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            toast_seconds: default_toast_seconds(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
