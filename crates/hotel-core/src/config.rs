//! Harness configuration read from the environment

use crate::error::{HotelError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_CHROMEDRIVER: &str = "chromedriver";
pub const DEFAULT_CHROMEDRIVER_PORT: u16 = 9515;

/// Environment variable names read by [`HarnessConfig::from_env`].
pub mod vars {
    pub const BASE_URL: &str = "BASE_URL";
    pub const GRID_URL: &str = "GRID_URL";
    pub const CI: &str = "CI";
    pub const CHROMEDRIVER: &str = "CHROMEDRIVER";
    pub const CHROMEDRIVER_PORT: &str = "CHROMEDRIVER_PORT";
}

/// Where the browser comes from and which application it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Root URL of the application under test.
    pub base_url: String,
    /// Remote WebDriver grid. `None` launches a local browser.
    pub grid_url: Option<String>,
    /// Running under continuous integration; local browsers go headless.
    pub ci: bool,
    /// chromedriver executable used for local browsers.
    pub chromedriver: String,
    pub chromedriver_port: u16,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            grid_url: None,
            ci: false,
            chromedriver: DEFAULT_CHROMEDRIVER.to_string(),
            chromedriver_port: DEFAULT_CHROMEDRIVER_PORT,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Empty values count as unset. Any other `CI` value, including `false`,
    /// enables headless mode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let chromedriver_port = match get(vars::CHROMEDRIVER_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| HotelError::InvalidConfig {
                    variable: vars::CHROMEDRIVER_PORT.to_string(),
                    reason: format!("{raw:?} is not a port number ({e})"),
                })?,
            None => defaults.chromedriver_port,
        };

        Ok(Self {
            base_url: get(vars::BASE_URL).unwrap_or(defaults.base_url),
            grid_url: get(vars::GRID_URL),
            ci: get(vars::CI).is_some(),
            chromedriver: get(vars::CHROMEDRIVER).unwrap_or(defaults.chromedriver),
            chromedriver_port,
        })
    }

    /// Absolute URL of an application route.
    pub fn url_for(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}
