//! Configuration Module
//!
//! Loads library defaults from environment variables.

use std::env;

use tracing::warn;

use crate::error::{Error, Result};

/// Environment variable holding the default LRU cache capacity.
pub const CACHE_CAPACITY_VAR: &str = "STRUCTURES_CACHE_CAPACITY";

/// Capacity used when nothing is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Library configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries a cache built with `LruCache::from_config` holds
    pub cache_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unparsable values are logged and replaced by their default.
    ///
    /// # Environment Variables
    /// - `STRUCTURES_CACHE_CAPACITY` - LRU cache capacity (default: 1000)
    pub fn from_env() -> Self {
        let cache_capacity = match read_var(CACHE_CAPACITY_VAR) {
            Ok(value) => value.unwrap_or(DEFAULT_CACHE_CAPACITY),
            Err(err) => {
                warn!("{}, falling back to {}", err, DEFAULT_CACHE_CAPACITY);
                DEFAULT_CACHE_CAPACITY
            }
        };

        Self { cache_capacity }
    }

    /// Like [`Config::from_env`], but fails on the first unparsable value.
    pub fn try_from_env() -> Result<Self> {
        Ok(Self {
            cache_capacity: read_var(CACHE_CAPACITY_VAR)?.unwrap_or(DEFAULT_CACHE_CAPACITY),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Reads and parses `var`; `Ok(None)` when it is unset.
fn read_var(var: &str) -> Result<Option<usize>> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidConfig {
                var: var.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 1000);
    }

    // All environment mutation lives in one test; the test harness runs tests in parallel.
    #[test]
    fn test_config_from_env() {
        env::remove_var(CACHE_CAPACITY_VAR);
        assert_eq!(Config::from_env(), Config::default());
        assert_eq!(Config::try_from_env(), Ok(Config::default()));

        env::set_var(CACHE_CAPACITY_VAR, " 64 ");
        assert_eq!(Config::from_env().cache_capacity, 64);
        assert_eq!(Config::try_from_env().map(|c| c.cache_capacity), Ok(64));

        env::set_var(CACHE_CAPACITY_VAR, "plenty");
        assert_eq!(Config::from_env().cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(matches!(
            Config::try_from_env(),
            Err(Error::InvalidConfig { ref value, .. }) if value == "plenty"
        ));

        env::remove_var(CACHE_CAPACITY_VAR);
    }
}
