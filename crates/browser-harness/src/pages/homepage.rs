use super::{expect_labels, expect_text, find, texts};
use crate::driver::IMPLICIT_WAIT;
use crate::error::Result;
use crate::session::BrowserSession;
use hotel_core::{routes, selectors};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomepageCheck {
    /// Document title.
    Title(String),
    /// Navbar shows every listed link.
    Navbar(Vec<String>),
    /// Main heading text.
    Heading(String),
}

#[instrument(skip(session), fields(session_id = %session.id()))]
pub async fn open(session: &BrowserSession) -> Result<()> {
    let url = session.url_for(routes::HOME);
    session.client().goto(&url).await?;
    info!(%url, "Opened homepage");
    Ok(())
}

pub async fn verify(session: &BrowserSession, check: &HomepageCheck) -> Result<()> {
    match check {
        HomepageCheck::Title(expected) => {
            let title = session.client().title().await?;
            expect_text("Page title", expected, &title)
        }
        HomepageCheck::Navbar(links) => {
            find(session, selectors::NAVBAR_LINKS, IMPLICIT_WAIT).await?;
            let shown = texts(session, selectors::NAVBAR_LINKS).await?;
            expect_labels("Navbar links", links, &shown)
        }
        HomepageCheck::Heading(expected) => {
            let heading = find(session, selectors::HEADING, IMPLICIT_WAIT).await?;
            expect_text("Heading", expected, &heading.text().await?)
        }
    }
}
