use anyhow::{bail, Context};
use log::LevelFilter;
use mcp7940::{DateTime, SqWFreq};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILE: &str = "rtcsync.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub device: DeviceConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub bus: String,
    pub variant: Variant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Mcp7940m,
    Mcp7940n,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    pub action: Action,
    #[serde(default)]
    pub battery_backup: bool,
    pub square_wave: Option<u32>,
    pub last_set_unix: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Print the clock state
    Show,
    /// Set the clock from the host's UTC time
    AdjustHost,
    /// Set the clock to the time this binary was built
    AdjustBuild,
    /// Trim the oscillator against the host's UTC time
    Calibrate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        // Try external file first
        if Path::new(CONFIG_FILE).exists() {
            let config_content = fs::read_to_string(CONFIG_FILE)
                .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
            let config = Self::parse(&config_content)?;
            log::info!("Loaded configuration from {}", CONFIG_FILE);
            Ok(config)
        } else {
            // Fallback to embedded defaults
            let config = Self::parse(include_str!("../rtcsync.toml.example"))?;
            log::warn!("Using embedded default configuration");
            Ok(config)
        }
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }
}

// Helper functions for easy access
impl Config {
    pub fn get_log_level(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(&self.logging.level)
            .with_context(|| format!("Unknown log level {:?}", self.logging.level))
    }

    pub fn get_square_wave(&self) -> anyhow::Result<Option<SqWFreq>> {
        let freq = match self.clock.square_wave {
            None => return Ok(None),
            Some(1) => SqWFreq::_1Hz,
            Some(64) => SqWFreq::_64Hz,
            Some(4096) => SqWFreq::_4_096kHz,
            Some(8192) => SqWFreq::_8_192kHz,
            Some(32768) => SqWFreq::_32_768kHz,
            Some(other) => bail!("Unsupported square-wave frequency {} Hz", other),
        };
        Ok(Some(freq))
    }

    pub fn get_last_set(&self) -> Option<DateTime> {
        self.clock.last_set_unix.map(DateTime::from_unix_time)
    }
}
