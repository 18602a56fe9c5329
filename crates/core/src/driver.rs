//! Browser-automation capability contracts consumed by the core.
//!
//! The core never talks to a concrete browser library; it drives these traits
//! and lets the binary (or a test double) supply the implementation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::locator::Locator;

/// Failure surface of a driver implementation.
#[derive(Debug, Error)]
pub enum DriverError {
	/// The locator matched no element on the current page.
	#[error("element not found: {0}")]
	NotFound(String),
	/// A bounded wait elapsed before its condition held.
	#[error("wait timed out after {timeout:?} for {what}")]
	Timeout { timeout: Duration, what: String },
	/// The browser window or tab is gone.
	#[error("browser window closed")]
	WindowClosed,
	/// The connection to the browser or the remote site failed.
	#[error("network failure: {0}")]
	Network(String),
	/// Any other driver-level fault.
	#[error("driver failure: {0}")]
	Backend(String),
}

impl DriverError {
	/// Whether a status read hitting this failure may be recovered by
	/// re-authenticating once. Backend faults are treated as genuine.
	pub fn is_transient(&self) -> bool {
		!matches!(self, Self::Backend(_))
	}
}

/// A navigable browser context.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
	type Element: Element;

	async fn navigate(&self, url: &str) -> Result<(), DriverError>;

	/// Identity of the current page, as reported by its title.
	async fn page_identity(&self) -> Result<String, DriverError>;

	/// Waits up to `timeout` for the element to be present and visible.
	async fn find_interactable(&self, locator: &Locator, timeout: Duration) -> Result<Self::Element, DriverError>;

	/// Waits up to `timeout` for the element to be absent or hidden.
	async fn wait_for_absence(&self, locator: &Locator, timeout: Duration) -> Result<(), DriverError>;
}

/// A located, interactable element handle.
///
/// Handles are only valid within the session that produced them; a reconnect
/// invalidates them.
#[async_trait]
pub trait Element: Send + Sync {
	async fn send_text(&self, text: &str) -> Result<(), DriverError>;

	async fn click(&self) -> Result<(), DriverError>;

	async fn read_attribute(&self, name: &str) -> Result<Option<String>, DriverError>;
}

/// Produces a fresh driver for each login.
///
/// The remote login flow is only reliable from a clean browser context, so
/// session establishment never reuses a driver that has already seen a page.
#[async_trait]
pub trait DriverFactory: Send + Sync {
	type Driver: BrowserDriver;

	async fn create(&self) -> Result<Self::Driver, DriverError>;
}
