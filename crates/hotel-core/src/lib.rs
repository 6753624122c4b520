//! # Hotel Core
//!
//! Shared vocabulary for the hotel room manager acceptance suite.
//!
//! - Closed sets of navbar links and form fields that scenario steps may name
//! - Routes and CSS selectors of the application under test
//! - Harness configuration loaded from the environment

pub mod config;
pub mod error;
pub mod navbar;
pub mod room_form;

pub use config::HarnessConfig;
pub use error::{HotelError, Result};
pub use navbar::NavLink;
pub use room_form::{RoomEntry, RoomField};

/// Suite version banner, logged when a run starts
pub const BUILD_INFO: &str = concat!(
    "Hotel acceptance suite ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);

/// Page routes of the hotel application
pub mod routes {
    pub const HOME: &str = "/";
    pub const ROOMS: &str = "/rooms";
    pub const ADD_ROOM: &str = "/add";
}

/// CSS selectors for elements the suite inspects
pub mod selectors {
    pub const NAVBAR_LINKS: &str = "nav a";
    pub const HEADING: &str = "h1";

    pub const ROOMS_TABLE: &str = "table";
    pub const ROOMS_TABLE_HEADERS: &str = "table thead th";
    pub const ROOMS_TABLE_ROWS: &str = "table tbody tr";
    pub const TABLE_CELL: &str = "td";
    pub const ROOMS_STORED_ALERT: &str = ".alert-info";

    pub const ADD_ROOM_FORM: &str = "form";
    pub const FORM_FIELD_LABELS: &str = "form label";
    pub const ROOM_NUMBER_INPUT: &str = "input[name='roomNumber']";
    pub const FLOOR_NUMBER_INPUT: &str = "input[name='floorNumber']";
    pub const GOOD_VIEW_SELECT: &str = "select[name='goodView']";
    pub const SUBMIT_BUTTON: &str = "form button[type='submit'], form input[type='submit']";
    pub const SUCCESS_ALERT: &str = ".alert-success";
}
