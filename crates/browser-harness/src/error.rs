//! Error types for browser-driven steps

use fantoccini::error::{CmdError, NewSessionError};
use hotel_core::HotelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Vocabulary(#[from] HotelError),

    #[error("No browser session is active; scenarios must start with \"I am on the homepage\"")]
    NoSession,

    #[error("Browser session setup failed: {reason}")]
    SessionSetup { reason: String },

    #[error("Failed to launch {program}: {source}")]
    DriverSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Element not found by Css selector `{selector}`: {source}")]
    ElementMissing {
        selector: String,
        #[source]
        source: CmdError,
    },

    #[error("{what}: expected {expected}, found {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("WebDriver command failed: {0}")]
    Command(#[from] CmdError),

    #[error("WebDriver session could not be created: {0}")]
    NewSession(#[from] NewSessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    pub fn assertion(
        what: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        HarnessError::Assertion {
            what: what.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
