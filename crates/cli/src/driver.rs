//! WebDriver-backed implementation of the core driver capabilities.
//!
//! One WebDriver session per login, matching the remote site's expectation
//! of a clean browser context for its login form. Interactable/absence
//! waits are polling loops bounded by the caller's timeout.

use std::time::{Duration, Instant};

use adc_core::driver::{BrowserDriver, DriverError, DriverFactory, Element};
use adc_core::locator::Locator;
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator as WdLocator};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Opens a fresh WebDriver session per login.
pub struct WebDriverFactory {
	endpoint: String,
}

impl WebDriverFactory {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self { endpoint: endpoint.into() }
	}
}

#[async_trait]
impl DriverFactory for WebDriverFactory {
	type Driver = WebDriver;

	async fn create(&self) -> Result<WebDriver, DriverError> {
		debug!(target = "adc.driver", endpoint = %self.endpoint, "opening webdriver session");
		let client = ClientBuilder::native()
			.connect(&self.endpoint)
			.await
			.map_err(|e| DriverError::Network(e.to_string()))?;
		Ok(WebDriver { client })
	}
}

pub struct WebDriver {
	client: Client,
}

#[async_trait]
impl BrowserDriver for WebDriver {
	type Element = WebElement;

	async fn navigate(&self, url: &str) -> Result<(), DriverError> {
		self.client.goto(url).await.map_err(map_cmd_error)
	}

	async fn page_identity(&self) -> Result<String, DriverError> {
		self.client.title().await.map_err(map_cmd_error)
	}

	async fn find_interactable(&self, locator: &Locator, timeout: Duration) -> Result<WebElement, DriverError> {
		let css = css_selector(locator);
		let deadline = Instant::now() + timeout;
		loop {
			match self.client.find(WdLocator::Css(&css)).await {
				Ok(element) => {
					if element.is_displayed().await.map_err(map_cmd_error)? {
						return Ok(WebElement { element });
					}
				}
				Err(ref e) if e.is_no_such_element() => {}
				Err(e) => return Err(map_cmd_error(e)),
			}
			if Instant::now() >= deadline {
				return Err(DriverError::Timeout {
					timeout,
					what: locator.to_string(),
				});
			}
			tokio::time::sleep(POLL_INTERVAL).await;
		}
	}

	async fn wait_for_absence(&self, locator: &Locator, timeout: Duration) -> Result<(), DriverError> {
		let css = css_selector(locator);
		let deadline = Instant::now() + timeout;
		loop {
			match self.client.find(WdLocator::Css(&css)).await {
				Err(ref e) if e.is_no_such_element() => return Ok(()),
				Ok(element) => {
					if !element.is_displayed().await.map_err(map_cmd_error)? {
						return Ok(());
					}
				}
				Err(e) => return Err(map_cmd_error(e)),
			}
			if Instant::now() >= deadline {
				return Err(DriverError::Timeout {
					timeout,
					what: locator.to_string(),
				});
			}
			tokio::time::sleep(POLL_INTERVAL).await;
		}
	}
}

pub struct WebElement {
	element: fantoccini::elements::Element,
}

#[async_trait]
impl Element for WebElement {
	async fn send_text(&self, text: &str) -> Result<(), DriverError> {
		self.element.send_keys(text).await.map_err(map_cmd_error)
	}

	async fn click(&self) -> Result<(), DriverError> {
		self.element.click().await.map_err(map_cmd_error)
	}

	async fn read_attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
		self.element.attr(name).await.map_err(map_cmd_error)
	}
}

fn css_selector(locator: &Locator) -> String {
	// Attribute selectors cope with the `$`-laden names the remote uses.
	match locator {
		Locator::Id(v) => format!(r#"[id="{v}"]"#),
		Locator::Name(v) => format!(r#"[name="{v}"]"#),
	}
}

fn map_cmd_error(error: CmdError) -> DriverError {
	// A stale handle right after the arming widget re-renders reads as a
	// miss, so the status-read recovery path covers it.
	if error.is_no_such_element() || error.is_stale_element_reference() {
		return DriverError::NotFound(error.to_string());
	}
	if error.is_no_such_window() {
		return DriverError::WindowClosed;
	}
	match error {
		CmdError::Lost(e) => DriverError::Network(e.to_string()),
		other => DriverError::Backend(other.to_string()),
	}
}
