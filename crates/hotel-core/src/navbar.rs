//! Navbar links the suite knows how to follow

use crate::error::{HotelError, Result};
use crate::routes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A navbar link that opens a page the suite can drive.
///
/// `Home` is rendered in the navbar but scenarios reach the homepage through
/// the `I am on the homepage` step, so it is not a navigation target here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavLink {
    Rooms,
    Add,
}

impl NavLink {
    pub const ALL: [NavLink; 2] = [NavLink::Rooms, NavLink::Add];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Rooms => "Rooms",
            NavLink::Add => "Add",
        }
    }

    /// Path of the page the link opens, relative to the application root.
    pub fn route(self) -> &'static str {
        match self {
            NavLink::Rooms => routes::ROOMS,
            NavLink::Add => routes::ADD_ROOM,
        }
    }
}

impl FromStr for NavLink {
    type Err = HotelError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "Rooms" => Ok(NavLink::Rooms),
            "Add" => Ok(NavLink::Add),
            other => Err(HotelError::UnsupportedLink {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
