//! Rooms list page

use super::{click_nav_link, expect_labels, expect_text, find, texts};
use crate::driver::IMPLICIT_WAIT;
use crate::error::{HarnessError, Result};
use crate::session::BrowserSession;
use fantoccini::Locator;
use hotel_core::{selectors, NavLink, RoomEntry};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomsCheck {
    /// Page heading names the page.
    Title(String),
    RoomTable,
    /// Table header contains every listed column.
    Columns(Vec<String>),
    /// Some row holds this room.
    Room(RoomEntry),
    /// Alert reporting how many rooms are stored.
    StoredAlert,
}

#[instrument(skip(session), fields(session_id = %session.id()))]
pub async fn open(session: &BrowserSession) -> Result<()> {
    click_nav_link(session, NavLink::Rooms).await
}

pub async fn verify(session: &BrowserSession, check: &RoomsCheck) -> Result<()> {
    match check {
        RoomsCheck::Title(expected) => {
            let heading = find(session, selectors::HEADING, IMPLICIT_WAIT).await?;
            expect_text("Page heading", expected, &heading.text().await?)
        }
        RoomsCheck::RoomTable => {
            find(session, selectors::ROOMS_TABLE, IMPLICIT_WAIT).await?;
            Ok(())
        }
        RoomsCheck::Columns(columns) => {
            find(session, selectors::ROOMS_TABLE_HEADERS, IMPLICIT_WAIT).await?;
            let headers = texts(session, selectors::ROOMS_TABLE_HEADERS).await?;
            expect_labels("Rooms table columns", columns, &headers)
        }
        RoomsCheck::Room(entry) => verify_room(session, entry).await,
        RoomsCheck::StoredAlert => {
            let alert = find(session, selectors::ROOMS_STORED_ALERT, IMPLICIT_WAIT).await?;
            let text = alert.text().await?;
            if mentions_count(&text) {
                Ok(())
            } else {
                Err(HarnessError::assertion(
                    "Rooms stored alert",
                    "a room count",
                    format!("{text:?}"),
                ))
            }
        }
    }
}

async fn verify_room(session: &BrowserSession, entry: &RoomEntry) -> Result<()> {
    find(session, selectors::ROOMS_TABLE_ROWS, IMPLICIT_WAIT).await?;
    let rows = session
        .client()
        .find_all(Locator::Css(selectors::ROOMS_TABLE_ROWS))
        .await?;

    let row_count = rows.len();
    for row in rows {
        let mut cells = Vec::new();
        for cell in row.find_all(Locator::Css(selectors::TABLE_CELL)).await? {
            cells.push(cell.text().await?);
        }
        if entry.matches_cells(&cells) {
            debug!(%entry, "Room found");
            return Ok(());
        }
    }

    Err(HarnessError::assertion(
        "Rooms table",
        entry.to_string(),
        format!("no matching row among {row_count}"),
    ))
}

fn mentions_count(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
