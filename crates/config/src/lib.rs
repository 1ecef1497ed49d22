// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Default schema version for YAML configs
fn default_schema_version() -> String {
    SUPPORTED_SCHEMA_VERSION.to_string()
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_sweep_delay_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

/// Settings for the `state-exposer` target.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExposerConfig {
    /// Pause inside every tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Query installed system memory after every tick.
    #[serde(default = "default_true")]
    pub probe_memory: bool,
}

impl Default for ExposerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            probe_memory: true,
        }
    }
}

impl ExposerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Settings for the `fault-injector` target.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InjectorConfig {
    /// Pause after every full sweep of the fault catalogue.
    #[serde(default = "default_sweep_delay_ms")]
    pub sweep_delay_ms: u64,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            sweep_delay_ms: default_sweep_delay_ms(),
        }
    }
}

impl InjectorConfig {
    pub fn sweep_delay(&self) -> Duration {
        Duration::from_millis(self.sweep_delay_ms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default)]
    pub exposer: ExposerConfig,
    #[serde(default)]
    pub injector: InjectorConfig,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            exposer: ExposerConfig::default(),
            injector: InjectorConfig::default(),
        }
    }
}

impl TargetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read target config at {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse Target Config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::debug!("Loaded target config from {:?}", path);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            anyhow::bail!(
                "Unsupported schema_version '{}'. Supported versions: '{}'",
                self.schema_version,
                SUPPORTED_SCHEMA_VERSION
            );
        }

        if self.exposer.tick_interval_ms == 0 {
            tracing::warn!("exposer.tick_interval_ms is 0; ticks will not pause");
        }

        Ok(())
    }
}
