//! Fields of the add-room form and the rows it produces

use crate::error::{HotelError, Result};
use crate::selectors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-text inputs of the add-room form that a scenario can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomField {
    RoomNumber,
    FloorNumber,
}

impl RoomField {
    pub const ALL: [RoomField; 2] = [RoomField::RoomNumber, RoomField::FloorNumber];

    pub fn label(self) -> &'static str {
        match self {
            RoomField::RoomNumber => "Room number",
            RoomField::FloorNumber => "Floor number",
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            RoomField::RoomNumber => selectors::ROOM_NUMBER_INPUT,
            RoomField::FloorNumber => selectors::FLOOR_NUMBER_INPUT,
        }
    }
}

impl FromStr for RoomField {
    type Err = HotelError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "Room number" => Ok(RoomField::RoomNumber),
            "Floor number" => Ok(RoomField::FloorNumber),
            other => Err(HotelError::UnsupportedField {
                field: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the rooms table as the scenario expects to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub room_number: String,
    pub floor_number: String,
    pub good_view: String,
}

impl RoomEntry {
    pub fn new(
        room_number: impl Into<String>,
        floor_number: impl Into<String>,
        good_view: impl Into<String>,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            floor_number: floor_number.into(),
            good_view: good_view.into(),
        }
    }

    /// Whether the leading cells of a rendered row hold this entry.
    ///
    /// Cell text is compared after trimming; extra trailing cells are ignored.
    pub fn matches_cells<S: AsRef<str>>(&self, cells: &[S]) -> bool {
        let expected = [&self.room_number, &self.floor_number, &self.good_view];
        cells.len() >= expected.len()
            && expected
                .iter()
                .zip(cells)
                .all(|(want, got)| want.trim() == AsRef::<str>::as_ref(got).trim())
    }
}

impl fmt::Display for RoomEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} on floor {} (good view: {})",
            self.room_number, self.floor_number, self.good_view
        )
    }
}
