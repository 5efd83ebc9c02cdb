//! TOML configuration for the submit driver.

use anyhow::{Context, Result};
use assetbench_connector::ConnectorConfig;
use assetbench_workload::RoundArguments;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level driver configuration.
///
/// ```toml
/// [connector]
/// gateway_url = "http://127.0.0.1:3000"
/// request_timeout_ms = 30000
///
/// [round]
/// label = "transfer-asset"
///
/// [round.arguments]
/// contractId = "basic"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    /// Gateway connection settings
    #[serde(default)]
    pub connector: ConnectorConfig,

    /// The round to run
    pub round: RoundConfig,
}

/// One benchmark round.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundConfig {
    /// Human-readable label used in logs
    #[serde(default = "default_label")]
    pub label: String,

    /// Arguments handed to the workload module
    #[serde(default)]
    pub arguments: RoundArguments,
}

fn default_label() -> String {
    "transfer-asset".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.connector.validate()?;
        Ok(config)
    }
}
