//! Page helpers for the hotel application
//!
//! Each page module exposes an `open` helper and a closed set of checks or
//! actions. Steps pick a variant; the page module knows how to drive it.

pub mod add_room;
pub mod homepage;
pub mod rooms;

use crate::driver::IMPLICIT_WAIT;
use crate::error::{HarnessError, Result};
use crate::session::BrowserSession;
use fantoccini::elements::Element;
use fantoccini::Locator;
use hotel_core::NavLink;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

const ROUTE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Follow a navbar link and wait for its page.
pub async fn follow(session: &BrowserSession, link: NavLink) -> Result<()> {
    match link {
        NavLink::Rooms => rooms::open(session).await,
        NavLink::Add => add_room::open(session).await,
    }
}

pub(crate) async fn click_nav_link(session: &BrowserSession, link: NavLink) -> Result<()> {
    let client = session.client();
    let anchor = client
        .wait()
        .at_most(IMPLICIT_WAIT)
        .for_element(Locator::LinkText(link.label()))
        .await
        .map_err(|source| HarnessError::ElementMissing {
            selector: format!("nav link {link}"),
            source,
        })?;
    anchor.click().await?;

    wait_for_route(session, link.route()).await
}

/// Poll the current URL until its path is `route`.
pub(crate) async fn wait_for_route(session: &BrowserSession, route: &str) -> Result<()> {
    let deadline = Instant::now() + IMPLICIT_WAIT;
    let mut path = String::new();

    while Instant::now() < deadline {
        path = session.client().current_url().await?.path().to_string();
        if path_matches(&path, route) {
            debug!(route, "Page reached");
            return Ok(());
        }
        tokio::time::sleep(ROUTE_POLL_INTERVAL).await;
    }

    Err(HarnessError::assertion("Current page", route, path))
}

pub(crate) async fn find(
    session: &BrowserSession,
    selector: &str,
    wait: Duration,
) -> Result<Element> {
    session
        .client()
        .wait()
        .at_most(wait)
        .for_element(Locator::Css(selector))
        .await
        .map_err(|source| HarnessError::ElementMissing {
            selector: selector.to_string(),
            source,
        })
}

/// Visible text of every element matching `selector`, trimmed.
pub(crate) async fn texts(session: &BrowserSession, selector: &str) -> Result<Vec<String>> {
    let elements = session.client().find_all(Locator::Css(selector)).await?;
    let mut texts = Vec::with_capacity(elements.len());
    for element in elements {
        texts.push(element.text().await?.trim().to_string());
    }
    Ok(texts)
}

pub(crate) fn expect_text(what: &str, expected: &str, actual: &str) -> Result<()> {
    if expected.trim() == actual.trim() {
        Ok(())
    } else {
        Err(HarnessError::assertion(
            what,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Fail unless every expected label appears among the rendered ones.
pub(crate) fn expect_labels<S: AsRef<str>>(
    what: &str,
    expected: &[S],
    actual: &[String],
) -> Result<()> {
    let missing = missing_labels(expected, actual);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::assertion(
            what,
            format!("{missing:?}"),
            format!("{actual:?}"),
        ))
    }
}

fn missing_labels<S: AsRef<str>>(expected: &[S], actual: &[String]) -> Vec<String> {
    expected
        .iter()
        .map(|label| AsRef::<str>::as_ref(label).trim())
        .filter(|label| !actual.iter().any(|shown| shown.trim() == *label))
        .map(str::to_string)
        .collect()
}

fn path_matches(path: &str, route: &str) -> bool {
    path.trim_end_matches('/') == route.trim_end_matches('/')
}
