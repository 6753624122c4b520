//! Scenario hooks shared by the cucumber runners

use browser_harness::{Quit, SessionSlot};
use cucumber::event::ScenarioFinished;
use cucumber::gherkin::{Feature, Rule, Scenario};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use tracing::{debug, warn};

/// A world that owns a per-scenario session slot.
pub trait ScenarioSession {
    type Session: Quit;

    fn session_slot(&mut self) -> &mut SessionSlot<Self::Session>;
}

/// `after` hook closing the scenario's session, whether its steps passed or
/// failed.
pub fn close_session_after_scenario<'a, W>(
    _feature: &'a Feature,
    _rule: Option<&'a Rule>,
    _scenario: &'a Scenario,
    _finished: &'a ScenarioFinished,
    world: Option<&'a mut W>,
) -> LocalBoxFuture<'a, ()>
where
    W: ScenarioSession,
{
    async move {
        let Some(world) = world else {
            return;
        };
        match world.session_slot().teardown().await {
            Ok(true) => debug!("Scenario browser session closed"),
            Ok(false) => debug!("Scenario finished without a browser session"),
            Err(e) => warn!(error = %e, "Failed to close scenario browser session"),
        }
    }
    .boxed_local()
}
