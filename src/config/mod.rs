//! Engine configuration: scan window, chunk size, and freezer cadence
//!
//! Configuration is loaded from a TOML file; a missing file yields the
//! defaults, and a present file only needs to name the keys it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default scan chunk size, matching typical page granularity
pub const DEFAULT_SCAN_CHUNK_SIZE: usize = 4096;

/// Default lower bound of the scan window
pub const DEFAULT_SCAN_START: u64 = 0x10000;

/// Default upper bound of the scan window
pub const DEFAULT_SCAN_END: u64 = 0x7FFF_FFFF;

/// Default freezer rewrite period in milliseconds (~20 Hz)
pub const DEFAULT_FREEZE_INTERVAL_MS: u64 = 50;

/// Configuration-related error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Bytes read per chunk during a scan
    pub chunk_size: usize,
    /// Lower bound of the default scan window
    pub start_address: u64,
    /// Upper bound of the default scan window
    pub end_address: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            chunk_size: DEFAULT_SCAN_CHUNK_SIZE,
            start_address: DEFAULT_SCAN_START,
            end_address: DEFAULT_SCAN_END,
        }
    }
}

/// Freezer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerConfig {
    /// Rewrite period in milliseconds
    pub interval_ms: u64,
}

impl Default for FreezerConfig {
    fn default() -> Self {
        FreezerConfig {
            interval_ms: DEFAULT_FREEZE_INTERVAL_MS,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub freezer: FreezerConfig,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// A missing file is not an error: the defaults are returned.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let text = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the engine relies on
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scan.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "scan.chunk_size must be nonzero".to_string(),
            ));
        }
        if self.scan.start_address >= self.scan.end_address {
            return Err(ConfigError::Invalid(format!(
                "scan window is empty: 0x{:X} >= 0x{:X}",
                self.scan.start_address, self.scan.end_address
            )));
        }
        if self.freezer.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "freezer.interval_ms must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.chunk_size, 4096);
        assert_eq!(config.scan.start_address, 0x10000);
        assert_eq!(config.scan.end_address, 0x7FFF_FFFF);
        assert_eq!(config.freezer.interval_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str(
            "[scan]\n\
             chunk_size = 8192\n",
        )
        .unwrap();

        assert_eq!(config.scan.chunk_size, 8192);
        assert_eq!(config.scan.start_address, DEFAULT_SCAN_START);
        assert_eq!(config.freezer.interval_ms, DEFAULT_FREEZE_INTERVAL_MS);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.scan.chunk_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.scan.start_address = 0x1000;
        config.scan.end_address = 0x1000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.freezer.interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = Config::load("definitely-not-a-real-file.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
