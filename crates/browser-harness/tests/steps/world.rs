use crate::support::ScenarioSession;
use anyhow::Result;
use browser_harness::hotel_core::HarnessConfig;
use browser_harness::{BrowserSession, SessionSlot};
use cucumber::World;

/// Per-scenario context. Each scenario gets a fresh world, so sessions are
/// never shared between scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct HotelWorld {
    pub config: HarnessConfig,
    pub session: SessionSlot<BrowserSession>,
}

impl HotelWorld {
    async fn new() -> Result<Self, anyhow::Error> {
        Ok(Self {
            config: HarnessConfig::from_env()?,
            session: SessionSlot::default(),
        })
    }

    pub async fn start_session(&mut self) -> Result<&BrowserSession> {
        let config = &self.config;
        let session = self
            .session
            .activate_with(|| BrowserSession::open(config))
            .await?;
        Ok(session)
    }

    pub fn browser(&self) -> Result<&BrowserSession> {
        Ok(self.session.get()?)
    }
}

impl ScenarioSession for HotelWorld {
    type Session = BrowserSession;

    fn session_slot(&mut self) -> &mut SessionSlot<BrowserSession> {
        &mut self.session
    }
}
