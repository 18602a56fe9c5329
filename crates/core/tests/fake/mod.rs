//! Scripted in-memory driver standing in for a real browser.
//!
//! Models just enough of the remote UI to exercise the login protocol, the
//! status-read recovery policy, and the action sequences: a login page, a
//! landing page gated on credentials, and a lockstep element table with
//! injectable failures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use adc_core::config::ClientConfig;
use adc_core::controller::AlarmController;
use adc_core::driver::{BrowserDriver, DriverError, DriverFactory, Element};
use adc_core::locator::Locator;
use adc_core::session::Credentials;
use async_trait::async_trait;

pub const VALID_USERNAME: &str = "jane@example.com";
pub const VALID_PASSWORD: &str = "hunter2";

/// Mutable model of the remote system, shared across driver instances so a
/// reconnect observes the same panel.
pub struct RemoteUi {
	pub valid_username: String,
	pub valid_password: String,
	/// Current alt text of the status indicator.
	pub alarm_state: String,
	/// Inject N transient failures into upcoming refresh lookups.
	pub fail_status_reads: usize,
	/// Every refresh lookup fails with a non-transient backend fault.
	pub fail_status_backend: bool,
	/// The arm confirmation buttons never render.
	pub drop_secondary: bool,
	/// The in-progress indicator never clears.
	pub busy_never_clears: bool,
	/// The login page is unreachable (wrong page served).
	pub login_page_down: bool,
	pub clicks: Vec<String>,
	pub absence_waits: Vec<String>,
}

/// One harness per test: remote model, config, and creation counter.
pub struct FakeHarness {
	pub remote: Arc<Mutex<RemoteUi>>,
	pub config: ClientConfig,
	created: Arc<AtomicUsize>,
}

pub fn harness(alarm_state: &str) -> FakeHarness {
	FakeHarness {
		remote: Arc::new(Mutex::new(RemoteUi {
			valid_username: VALID_USERNAME.to_string(),
			valid_password: VALID_PASSWORD.to_string(),
			alarm_state: alarm_state.to_string(),
			fail_status_reads: 0,
			fail_status_backend: false,
			drop_secondary: false,
			busy_never_clears: false,
			login_page_down: false,
			clicks: Vec::new(),
			absence_waits: Vec::new(),
		})),
		config: ClientConfig::default(),
		created: Arc::new(AtomicUsize::new(0)),
	}
}

impl FakeHarness {
	pub fn factory(&self) -> FakeFactory {
		FakeFactory {
			remote: Arc::clone(&self.remote),
			config: self.config.clone(),
			created: Arc::clone(&self.created),
		}
	}

	pub fn controller(&self) -> AlarmController<FakeFactory> {
		self.controller_as(VALID_USERNAME, VALID_PASSWORD)
	}

	pub fn controller_as(&self, username: &str, password: &str) -> AlarmController<FakeFactory> {
		AlarmController::new(self.factory(), Credentials::new(username, password), self.config.clone())
	}

	/// How many driver instances (logins attempted) were created so far.
	pub fn creations(&self) -> usize {
		self.created.load(Ordering::SeqCst)
	}

	pub fn edit(&self, f: impl FnOnce(&mut RemoteUi)) {
		f(&mut self.remote.lock().expect("remote lock"));
	}

	pub fn clicks(&self) -> Vec<String> {
		self.remote.lock().expect("remote lock").clicks.clone()
	}

	pub fn click_count(&self, locator: &Locator) -> usize {
		let key = locator.to_string();
		self.clicks().iter().filter(|c| **c == key).count()
	}

	pub fn absence_waits(&self) -> Vec<String> {
		self.remote.lock().expect("remote lock").absence_waits.clone()
	}

	pub fn alarm_state(&self) -> String {
		self.remote.lock().expect("remote lock").alarm_state.clone()
	}
}

pub struct FakeFactory {
	remote: Arc<Mutex<RemoteUi>>,
	config: ClientConfig,
	created: Arc<AtomicUsize>,
}

#[async_trait]
impl DriverFactory for FakeFactory {
	type Driver = FakeDriver;

	async fn create(&self) -> Result<FakeDriver, DriverError> {
		self.created.fetch_add(1, Ordering::SeqCst);
		Ok(FakeDriver {
			remote: Arc::clone(&self.remote),
			config: self.config.clone(),
			page: Arc::new(Mutex::new(PageState::default())),
		})
	}
}

#[derive(Default)]
struct PageState {
	title: String,
	typed_username: String,
	typed_password: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
	Username,
	Password,
	Submit,
	Refresh,
	StatusIndicator,
	DisarmPrimary,
	ArmStayPrimary,
	ArmStaySecondary,
	ArmAwayPrimary,
	ArmAwaySecondary,
}

pub struct FakeDriver {
	remote: Arc<Mutex<RemoteUi>>,
	config: ClientConfig,
	page: Arc<Mutex<PageState>>,
}

impl FakeDriver {
	fn classify(&self, locator: &Locator) -> Option<Kind> {
		let t = &self.config.locators;
		if locator == &t.login_username {
			Some(Kind::Username)
		} else if locator == &t.login_password {
			Some(Kind::Password)
		} else if locator == &t.login_submit {
			Some(Kind::Submit)
		} else if locator == &t.refresh {
			Some(Kind::Refresh)
		} else if locator == &t.status_indicator {
			Some(Kind::StatusIndicator)
		} else if locator == &t.disarm.primary {
			Some(Kind::DisarmPrimary)
		} else if locator == &t.arm_stay.primary {
			Some(Kind::ArmStayPrimary)
		} else if t.arm_stay.secondary.as_ref() == Some(locator) {
			Some(Kind::ArmStaySecondary)
		} else if locator == &t.arm_away.primary {
			Some(Kind::ArmAwayPrimary)
		} else if t.arm_away.secondary.as_ref() == Some(locator) {
			Some(Kind::ArmAwaySecondary)
		} else {
			None
		}
	}
}

#[async_trait]
impl BrowserDriver for FakeDriver {
	type Element = FakeElement;

	async fn navigate(&self, url: &str) -> Result<(), DriverError> {
		let mut page = self.page.lock().expect("page lock");
		let down = self.remote.lock().expect("remote lock").login_page_down;
		page.title = if down {
			"Scheduled Maintenance".to_string()
		} else if url == self.config.login_url {
			self.config.login_page_identity.clone()
		} else {
			"about:blank".to_string()
		};
		page.typed_username.clear();
		page.typed_password.clear();
		Ok(())
	}

	async fn page_identity(&self) -> Result<String, DriverError> {
		Ok(self.page.lock().expect("page lock").title.clone())
	}

	async fn find_interactable(&self, locator: &Locator, timeout: Duration) -> Result<FakeElement, DriverError> {
		let kind = self.classify(locator).ok_or_else(|| DriverError::NotFound(locator.to_string()))?;
		let title = self.page.lock().expect("page lock").title.clone();
		let on_login = title == self.config.login_page_identity;
		let on_landing = title == self.config.landing_page_identity;

		let available = match kind {
			Kind::Username | Kind::Password | Kind::Submit => on_login,
			_ => on_landing,
		};
		if !available {
			return Err(DriverError::NotFound(locator.to_string()));
		}

		let mut remote = self.remote.lock().expect("remote lock");
		if kind == Kind::Refresh && remote.fail_status_backend {
			return Err(DriverError::Backend("automation protocol fault".to_string()));
		}
		if kind == Kind::Refresh && remote.fail_status_reads > 0 {
			remote.fail_status_reads -= 1;
			return Err(DriverError::Timeout {
				timeout,
				what: locator.to_string(),
			});
		}
		if matches!(kind, Kind::ArmStaySecondary | Kind::ArmAwaySecondary) && remote.drop_secondary {
			return Err(DriverError::Timeout {
				timeout,
				what: locator.to_string(),
			});
		}

		Ok(FakeElement {
			kind,
			locator: locator.clone(),
			remote: Arc::clone(&self.remote),
			page: Arc::clone(&self.page),
			landing_identity: self.config.landing_page_identity.clone(),
		})
	}

	async fn wait_for_absence(&self, locator: &Locator, timeout: Duration) -> Result<(), DriverError> {
		let mut remote = self.remote.lock().expect("remote lock");
		remote.absence_waits.push(locator.to_string());
		if remote.busy_never_clears {
			return Err(DriverError::Timeout {
				timeout,
				what: locator.to_string(),
			});
		}
		Ok(())
	}
}

pub struct FakeElement {
	kind: Kind,
	locator: Locator,
	remote: Arc<Mutex<RemoteUi>>,
	page: Arc<Mutex<PageState>>,
	landing_identity: String,
}

#[async_trait]
impl Element for FakeElement {
	async fn send_text(&self, text: &str) -> Result<(), DriverError> {
		let mut page = self.page.lock().expect("page lock");
		match self.kind {
			Kind::Username => page.typed_username = text.to_string(),
			Kind::Password => page.typed_password = text.to_string(),
			_ => {}
		}
		Ok(())
	}

	async fn click(&self) -> Result<(), DriverError> {
		let mut remote = self.remote.lock().expect("remote lock");
		remote.clicks.push(self.locator.to_string());
		match self.kind {
			Kind::Submit => {
				let mut page = self.page.lock().expect("page lock");
				if page.typed_username == remote.valid_username && page.typed_password == remote.valid_password {
					page.title = self.landing_identity.clone();
				}
			}
			Kind::DisarmPrimary => remote.alarm_state = "Disarmed".to_string(),
			Kind::ArmStaySecondary => remote.alarm_state = "Armed Stay".to_string(),
			Kind::ArmAwaySecondary => remote.alarm_state = "Armed Away".to_string(),
			_ => {}
		}
		Ok(())
	}

	async fn read_attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
		if self.kind == Kind::StatusIndicator && name == "alt" {
			let remote = self.remote.lock().expect("remote lock");
			return Ok(Some(remote.alarm_state.clone()));
		}
		Ok(None)
	}
}
