use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Environment variable holding a JSON encoded [`CalendarConfig`]
pub const CONFIG_ENV: &str = "ICELANDIC_HOLIDAYS_CONFIG";

/// Range of years a [`crate::Calendar`] precomputes, inclusive on both ends
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CalendarConfig {
    pub start: i32,
    pub end: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            start: 2000,
            end: 2050,
        }
    }
}

impl CalendarConfig {
    /// Parse a configuration such as `{"start": 1990, "end": 2030}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<CalendarConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration from `ICELANDIC_HOLIDAYS_CONFIG`, falling back
    /// to the default range when it is not set
    pub fn from_env() -> Result<CalendarConfig> {
        match env::var(CONFIG_ENV) {
            Ok(json) => {
                let config = Self::from_json(&json)?;
                debug!(
                    start = config.start,
                    end = config.end,
                    "loaded calendar config from environment"
                );
                Ok(config)
            }
            Err(_) => Ok(CalendarConfig::default()),
        }
    }
}
