//! Add-room form

use super::{click_nav_link, expect_labels, expect_text, find, texts};
use crate::driver::{EXTENDED_WAIT, IMPLICIT_WAIT};
use crate::error::{HarnessError, Result};
use crate::session::BrowserSession;
use hotel_core::{selectors, NavLink, RoomField};
use tracing::{debug, instrument};

/// Interactions with the add-room form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRoomAction {
    Fill(RoomField, String),
    SelectGoodView(String),
    Submit,
}

#[instrument(skip(session), fields(session_id = %session.id()))]
pub async fn open(session: &BrowserSession) -> Result<()> {
    click_nav_link(session, NavLink::Add).await?;
    find(session, selectors::ADD_ROOM_FORM, IMPLICIT_WAIT).await?;
    Ok(())
}

pub async fn perform(session: &BrowserSession, action: &AddRoomAction) -> Result<()> {
    debug!(?action, "Add-room form");
    match action {
        AddRoomAction::Fill(field, value) => {
            let input = find(session, field.selector(), IMPLICIT_WAIT).await?;
            input.clear().await?;
            input.send_keys(value).await?;
        }
        AddRoomAction::SelectGoodView(value) => {
            let select = find(session, selectors::GOOD_VIEW_SELECT, IMPLICIT_WAIT).await?;
            select.select_by_label(value).await?;
        }
        AddRoomAction::Submit => {
            let button = find(session, selectors::SUBMIT_BUTTON, IMPLICIT_WAIT).await?;
            button.click().await?;
        }
    }
    Ok(())
}

/// The confirmation banner is shown after submitting.
pub async fn verify_success(session: &BrowserSession) -> Result<()> {
    let banner = find(session, selectors::SUCCESS_ALERT, IMPLICIT_WAIT).await?;
    if !banner.is_displayed().await? {
        return Err(HarnessError::assertion(
            "Add room confirmation",
            "a visible success banner",
            "a hidden banner",
        ));
    }

    let text = banner.text().await?;
    if text.trim().is_empty() {
        return Err(HarnessError::assertion(
            "Add room confirmation",
            "a success message",
            "an empty banner",
        ));
    }
    Ok(())
}

pub async fn verify_form_fields<S: AsRef<str>>(
    session: &BrowserSession,
    labels: &[S],
) -> Result<()> {
    find(session, selectors::ADD_ROOM_FORM, EXTENDED_WAIT).await?;
    for selector in [
        selectors::ROOM_NUMBER_INPUT,
        selectors::FLOOR_NUMBER_INPUT,
        selectors::GOOD_VIEW_SELECT,
    ] {
        find(session, selector, EXTENDED_WAIT).await?;
    }

    let shown = texts(session, selectors::FORM_FIELD_LABELS).await?;
    expect_labels("Add room form labels", labels, &shown)
}

pub async fn verify_submit_button(session: &BrowserSession, label: &str) -> Result<()> {
    let button = find(session, selectors::SUBMIT_BUTTON, EXTENDED_WAIT).await?;

    // <input type="submit"> carries its caption in `value`
    let mut caption = button.text().await?;
    if caption.trim().is_empty() {
        caption = button.attr("value").await?.unwrap_or_default();
    }
    expect_text("Submit button", label, &caption)
}
