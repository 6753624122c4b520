//! Per-scenario browser sessions
//!
//! A scenario owns at most one session. [`SessionSlot`] tracks whether it has
//! been opened and guarantees it is closed once when the scenario ends.

use crate::chromedriver::ChromeDriver;
use crate::driver::{
    DriverTarget, IMPLICIT_WAIT, SESSION_SETUP_TIMEOUT, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::error::{HarnessError, Result};
use async_trait::async_trait;
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder};
use hotel_core::HarnessConfig;
use std::future::Future;
use tokio::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub type SessionId = Uuid;

/// A resource that must be released when its scenario ends.
#[async_trait]
pub trait Quit: Send + Sized {
    async fn quit(self) -> Result<()>;
}

#[derive(Debug)]
pub enum SessionSlot<S> {
    Absent,
    Active(S),
}

impl<S> Default for SessionSlot<S> {
    fn default() -> Self {
        SessionSlot::Absent
    }
}

impl<S: Quit> SessionSlot<S> {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionSlot::Active(_))
    }

    pub fn get(&self) -> Result<&S> {
        match self {
            SessionSlot::Active(session) => Ok(session),
            SessionSlot::Absent => Err(HarnessError::NoSession),
        }
    }

    /// Open a session with `open` unless one is already active.
    pub async fn activate_with<F, Fut>(&mut self, open: F) -> Result<&S>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<S>>,
    {
        if let SessionSlot::Absent = self {
            *self = SessionSlot::Active(open().await?);
        }
        self.get()
    }

    /// Close the active session, if any. Returns whether one was closed.
    ///
    /// The slot is left `Absent` even when closing fails.
    pub async fn teardown(&mut self) -> Result<bool> {
        match std::mem::take(self) {
            SessionSlot::Active(session) => {
                session.quit().await?;
                Ok(true)
            }
            SessionSlot::Absent => Ok(false),
        }
    }
}

/// A WebDriver session plus the local chromedriver serving it, if any.
#[derive(Debug)]
pub struct BrowserSession {
    id: SessionId,
    client: Client,
    driver: Option<ChromeDriver>,
    base_url: String,
}

impl BrowserSession {
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub async fn open(config: &HarnessConfig) -> Result<Self> {
        let deadline = Instant::now() + SESSION_SETUP_TIMEOUT;

        let session = tokio::time::timeout_at(deadline, Self::connect(config))
            .await
            .map_err(|_| setup_timed_out())??;

        let settings = apply_window_settings(session.client.clone());
        let session = finish_setup(session, deadline, settings).await?;

        info!(session_id = %session.id, "Browser session started");
        Ok(session)
    }

    async fn connect(config: &HarnessConfig) -> Result<Self> {
        let target = DriverTarget::from_config(config);

        let (webdriver_url, driver) = match &target {
            DriverTarget::Grid { url } => {
                info!(%url, "Using Selenium Grid");
                (url.clone(), None)
            }
            DriverTarget::Local { headless } => {
                if *headless {
                    info!("Running in CI, enabling headless mode for Chrome");
                }
                let driver =
                    ChromeDriver::spawn(&config.chromedriver, config.chromedriver_port).await?;
                (driver.url(), Some(driver))
            }
        };

        let client = ClientBuilder::native()
            .capabilities(target.capabilities())
            .connect(&webdriver_url)
            .await?;

        Ok(Self {
            id: Uuid::new_v4(),
            client,
            driver,
            base_url: config.base_url.clone(),
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn url_for(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Quit for BrowserSession {
    #[instrument(skip(self), fields(session_id = %self.id))]
    async fn quit(self) -> Result<()> {
        let closed = self.client.close().await;

        if let Some(driver) = self.driver {
            driver.stop().await?;
        }

        closed?;
        info!("Browser session closed");
        Ok(())
    }
}

async fn apply_window_settings(client: Client) -> Result<()> {
    client
        .update_timeouts(TimeoutConfiguration::new(None, None, Some(IMPLICIT_WAIT)))
        .await?;
    client.set_window_size(WINDOW_WIDTH, WINDOW_HEIGHT).await?;
    Ok(())
}

/// Run `configure` for a connected session before `deadline`.
///
/// The session is closed when configuration fails or the deadline passes.
async fn finish_setup<S, Fut>(session: S, deadline: Instant, configure: Fut) -> Result<S>
where
    S: Quit,
    Fut: Future<Output = Result<()>>,
{
    let error = match tokio::time::timeout_at(deadline, configure).await {
        Ok(Ok(())) => return Ok(session),
        Ok(Err(e)) => e,
        Err(_) => setup_timed_out(),
    };

    if let Err(quit_err) = session.quit().await {
        warn!(error = %quit_err, "Failed to close half-configured session");
    }
    Err(error)
}

fn setup_timed_out() -> HarnessError {
    HarnessError::SessionSetup {
        reason: format!("timed out after {SESSION_SETUP_TIMEOUT:?}"),
    }
}
