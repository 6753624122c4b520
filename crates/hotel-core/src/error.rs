//! Error types for the hotel acceptance suite

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotelError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("Link text {label} is not supported.")]
    UnsupportedLink { label: String },

    #[error("Unsupported field name: {field}")]
    UnsupportedField { field: String },

    #[error("Invalid value for {variable}: {reason}")]
    InvalidConfig { variable: String, reason: String },
}
