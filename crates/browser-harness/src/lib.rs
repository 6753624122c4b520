//! # Browser Harness
//!
//! WebDriver plumbing behind the hotel acceptance scenarios.
//!
//! - [`SessionSlot`] holds the one browser session a scenario may own and
//!   closes it exactly once at teardown
//! - [`BrowserSession`] connects to a Selenium grid or launches Chrome locally
//!   through chromedriver, depending on [`hotel_core::HarnessConfig`]
//! - [`pages`] drives the homepage, rooms list and add-room form

pub mod chromedriver;
pub mod driver;
pub mod error;
pub mod pages;
pub mod session;

pub use driver::{DriverTarget, EXTENDED_WAIT, HEADLESS_CHROME_ARGS, IMPLICIT_WAIT};
pub use error::{HarnessError, Result};
pub use pages::add_room::AddRoomAction;
pub use pages::homepage::HomepageCheck;
pub use pages::rooms::RoomsCheck;
pub use session::{BrowserSession, Quit, SessionId, SessionSlot};

pub use hotel_core;
