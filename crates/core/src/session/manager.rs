//! Session establishment and recovery.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::driver::{BrowserDriver, DriverError, DriverFactory, Element};
use crate::error::{AdcError, Result};
use crate::locator::Locator;
use crate::session::Credentials;

/// A live authenticated browser context.
///
/// Created only by a completed login; dropped wholesale on reconnect, which
/// also invalidates every element handle obtained through it.
pub struct Session<D: BrowserDriver> {
	driver: D,
}

impl<D: BrowserDriver> Session<D> {
	fn new(driver: D) -> Self {
		Self { driver }
	}

	/// Waits for the control to be interactable, bounded by `timeout`.
	pub async fn find(&self, locator: &Locator, timeout: Duration) -> Result<D::Element, DriverError> {
		self.driver.find_interactable(locator, timeout).await
	}

	/// Waits for the element to be absent or hidden, bounded by `timeout`.
	pub async fn wait_gone(&self, locator: &Locator, timeout: Duration) -> Result<(), DriverError> {
		self.driver.wait_for_absence(locator, timeout).await
	}
}

// Opaque: the driver inside carries no meaningful state to render.
impl<D: BrowserDriver> fmt::Debug for Session<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session").finish_non_exhaustive()
	}
}

/// Owns the single live [`Session`] and the credentials that produce one.
///
/// Callers borrow the session per logical operation and never cache it;
/// after [`SessionManager::reconnect`] the previous borrow is statically
/// impossible to hold.
pub struct SessionManager<F: DriverFactory> {
	factory: F,
	credentials: Credentials,
	config: Arc<ClientConfig>,
	session: Option<Session<F::Driver>>,
}

impl<F: DriverFactory> SessionManager<F> {
	pub fn new(factory: F, credentials: Credentials, config: Arc<ClientConfig>) -> Self {
		Self {
			factory,
			credentials,
			config,
			session: None,
		}
	}

	pub fn is_connected(&self) -> bool {
		self.session.is_some()
	}

	/// Returns the live session, logging in first when none is live.
	pub async fn session(&mut self) -> Result<&Session<F::Driver>> {
		if self.session.is_none() {
			self.establish().await?;
		}
		self.session.as_ref().ok_or_else(|| AdcError::LoginFailure("session not established".to_string()))
	}

	/// Discards the current session and logs in again.
	///
	/// Either returns a fresh live session or fails with
	/// [`AdcError::LoginFailure`]; no intermediate state is observable.
	pub async fn reconnect(&mut self) -> Result<&Session<F::Driver>> {
		if self.session.take().is_some() {
			debug!(target = "adc.session", "discarding stale session");
		}
		self.session().await
	}

	/// Runs the login protocol and stores the session only on full success.
	async fn establish(&mut self) -> Result<()> {
		let config = Arc::clone(&self.config);
		let driver = self
			.factory
			.create()
			.await
			.map_err(|e| AdcError::LoginFailure(format!("driver start failed: {e}")))?;

		driver
			.navigate(&config.login_url)
			.await
			.map_err(|e| AdcError::LoginFailure(format!("login page unreachable: {e}")))?;

		let identity = driver
			.page_identity()
			.await
			.map_err(|e| AdcError::LoginFailure(format!("login page unreadable: {e}")))?;
		if identity != config.login_page_identity {
			error!(target = "adc.session", %identity, "page is not the expected login page");
			return Err(AdcError::LoginFailure(format!("unexpected login page identity {identity:?}")));
		}

		let locators = &config.locators;
		let timeout = config.element_timeout;
		let username = login_control(&driver, &locators.login_username, timeout).await?;
		let password = login_control(&driver, &locators.login_password, timeout).await?;
		let submit = login_control(&driver, &locators.login_submit, timeout).await?;

		debug!(target = "adc.session", username = %self.credentials.username(), "submitting credentials");
		username
			.send_text(self.credentials.username())
			.await
			.map_err(|e| AdcError::LoginFailure(format!("username entry failed: {e}")))?;
		password
			.send_text(self.credentials.password())
			.await
			.map_err(|e| AdcError::LoginFailure(format!("password entry failed: {e}")))?;
		submit
			.click()
			.await
			.map_err(|e| AdcError::LoginFailure(format!("submit failed: {e}")))?;

		let identity = driver
			.page_identity()
			.await
			.map_err(|e| AdcError::LoginFailure(format!("post-login page unreadable: {e}")))?;
		if identity != config.landing_page_identity {
			error!(target = "adc.session", %identity, "login did not reach the system status page");
			return Err(AdcError::LoginFailure("credentials rejected or unexpected landing page".to_string()));
		}

		info!(target = "adc.session", "authenticated session established");
		self.session = Some(Session::new(driver));
		Ok(())
	}
}

async fn login_control<D: BrowserDriver>(driver: &D, locator: &Locator, timeout: Duration) -> Result<D::Element> {
	driver
		.find_interactable(locator, timeout)
		.await
		.map_err(|e| AdcError::LoginFailure(format!("login control {locator} unavailable: {e}")))
}
