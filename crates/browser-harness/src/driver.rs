//! Browser source selection and Chrome capabilities

use fantoccini::wd::Capabilities;
use hotel_core::HarnessConfig;
use serde_json::json;
use std::time::Duration;

/// Implicit element wait applied to every session.
pub const IMPLICIT_WAIT: Duration = Duration::from_secs(10);

/// Wait used by assertions that follow slower page transitions.
pub const EXTENDED_WAIT: Duration = Duration::from_secs(20);

/// Upper bound on session setup, sized for remote grid spin-up.
pub const SESSION_SETUP_TIMEOUT: Duration = Duration::from_secs(120);

pub const WINDOW_WIDTH: u32 = 1920;
pub const WINDOW_HEIGHT: u32 = 1080;

/// Chrome arguments for containerised CI runners.
pub const HEADLESS_CHROME_ARGS: [&str; 4] = [
    "--headless",
    "--disable-gpu",
    "--no-sandbox",
    "--disable-dev-shm-usage",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverTarget {
    /// Remote Selenium grid hosting the browser.
    Grid { url: String },
    /// Chrome launched on this machine through chromedriver.
    Local { headless: bool },
}

impl DriverTarget {
    pub fn from_config(config: &HarnessConfig) -> Self {
        match &config.grid_url {
            Some(url) => DriverTarget::Grid { url: url.clone() },
            None => DriverTarget::Local {
                headless: config.ci,
            },
        }
    }

    pub fn chrome_args(&self) -> Vec<&'static str> {
        match self {
            DriverTarget::Local { headless: true } => HEADLESS_CHROME_ARGS.to_vec(),
            DriverTarget::Local { headless: false } | DriverTarget::Grid { .. } => Vec::new(),
        }
    }

    /// Capabilities sent with the new-session request.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::new();
        caps.insert("browserName".to_string(), json!("chrome"));

        let args = self.chrome_args();
        if !args.is_empty() {
            caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        }

        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(grid_url: Option<&str>, ci: bool) -> HarnessConfig {
        HarnessConfig {
            grid_url: grid_url.map(str::to_string),
            ci,
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn no_grid_means_local_browser() {
        assert_eq!(
            DriverTarget::from_config(&config(None, false)),
            DriverTarget::Local { headless: false }
        );
    }

    #[test]
    fn grid_wins_over_local_launch() {
        let target = DriverTarget::from_config(&config(Some("http://grid:4444"), true));
        assert_eq!(
            target,
            DriverTarget::Grid {
                url: "http://grid:4444".to_string()
            }
        );
        assert!(target.chrome_args().is_empty());
    }

    #[test]
    fn ci_local_browser_runs_headless_without_sandbox() {
        let target = DriverTarget::from_config(&config(None, true));
        let args = target.chrome_args();
        for flag in [
            "--headless",
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ] {
            assert!(args.contains(&flag), "missing {flag}");
        }

        let caps = target.capabilities();
        assert_eq!(caps["goog:chromeOptions"]["args"][0], "--headless");
    }

    #[test]
    fn headed_local_browser_sends_no_chrome_options() {
        let caps = DriverTarget::Local { headless: false }.capabilities();
        assert_eq!(caps["browserName"], "chrome");
        assert!(!caps.contains_key("goog:chromeOptions"));
    }
}
