//! Configuration for the Sleeper client

use serde::{Deserialize, Serialize};

/// Sleeper API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SleeperConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self { api_base_url: "https://api.sleeper.app/v1".to_string(), timeout_secs: 30 }
    }
}
