//! Store configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use updt_config::domain::StoreConfigBuilder;
//!
//! let config = StoreConfigBuilder::new()
//!     .config_offset(0x0)
//!     .region_capacity(64)
//!     .build()?;
//! ```

use crate::domain::record::RECORD_SIZE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Flash address of the configuration region.
pub const DEFAULT_CONFIG_OFFSET: u64 = 0x0;

/// Where the configuration record lives in the block store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Byte offset of the record in the block store
    pub config_offset: u64,
    /// Bytes reserved for the region starting at `config_offset`
    pub region_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            config_offset: DEFAULT_CONFIG_OFFSET,
            region_capacity: RECORD_SIZE,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with validation
    pub fn new(config_offset: u64, region_capacity: usize) -> Result<Self, ConfigError> {
        let config = Self {
            config_offset,
            region_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from JSON, filling gaps with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the region can hold a record without wrapping the address space
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region_capacity < RECORD_SIZE {
            return Err(ConfigError::InvalidConfig(format!(
                "region_capacity {} is smaller than the {}-byte record",
                self.region_capacity, RECORD_SIZE
            )));
        }

        if self
            .config_offset
            .checked_add(self.region_capacity as u64)
            .is_none()
        {
            return Err(ConfigError::InvalidConfig(
                "config_offset + region_capacity overflows".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for StoreConfig with validation
#[derive(Default)]
pub struct StoreConfigBuilder {
    config_offset: Option<u64>,
    region_capacity: Option<usize>,
}

impl StoreConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record offset
    pub fn config_offset(mut self, offset: u64) -> Self {
        self.config_offset = Some(offset);
        self
    }

    /// Set the region size
    pub fn region_capacity(mut self, bytes: usize) -> Self {
        self.region_capacity = Some(bytes);
        self
    }

    /// Build the StoreConfig, validating all parameters
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let defaults = StoreConfig::default();

        let config = StoreConfig {
            config_offset: self.config_offset.unwrap_or(defaults.config_offset),
            region_capacity: self.region_capacity.unwrap_or(defaults.region_capacity),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StoreConfig::default();
        assert_eq!(config.config_offset, 0);
        assert_eq!(config.region_capacity, RECORD_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_region() {
        let result = StoreConfig::new(0, 24);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_wrapping_offset() {
        let result = StoreConfig::new(u64::MAX - 4, RECORD_SIZE);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = StoreConfigBuilder::new()
            .config_offset(0x1000)
            .build()
            .expect("Should use default capacity");
        assert_eq!(config.config_offset, 0x1000);
        assert_eq!(config.region_capacity, RECORD_SIZE);
    }

    #[test]
    fn test_from_json() {
        let config = StoreConfig::from_json(r#"{"config_offset": 512}"#).unwrap();
        assert_eq!(config.config_offset, 512);
        assert_eq!(config.region_capacity, RECORD_SIZE);

        let bad = StoreConfig::from_json(r#"{"region_capacity": 4}"#);
        assert!(matches!(bad, Err(ConfigError::InvalidConfig(_))));

        let garbage = StoreConfig::from_json("not json");
        assert!(matches!(garbage, Err(ConfigError::InvalidConfig(_))));
    }
}
