//! Programmatic control of an alarm.com account through its rendered web UI.
//!
//! The remote service exposes no public API; the only integration surface is
//! its HTML pages reached through a browser-automation driver. This crate
//! layers session and arming-state management on top of an abstract
//! [`BrowserDriver`] capability: establishing and recovering an authenticated
//! session, deciding when a self-reported status is trustworthy, and
//! sequencing the multi-step click/wait protocol the UI requires for arm and
//! disarm.
//!
//! Driver implementations live outside this crate (the `adc` binary ships a
//! WebDriver-backed one); tests inject scripted doubles through the same
//! traits.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod locator;
pub mod session;
pub mod state;

pub use config::ClientConfig;
pub use controller::AlarmController;
pub use driver::{BrowserDriver, DriverError, DriverFactory, Element};
pub use error::{AdcError, Result, SequenceStep};
pub use locator::{ActionTarget, Locator, LocatorTable};
pub use session::{Credentials, Session, SessionManager};
pub use state::{ActionRequest, AlarmState};
