//! Client configuration: endpoint, page identities, timeouts, locators.

use std::time::Duration;

use crate::locator::LocatorTable;

/// Default bound for an interactable-element wait.
pub const DEFAULT_ELEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound for the in-progress indicator to clear after an arm action.
///
/// Longer than the element timeout: the panel round-trips to the physical
/// system before the page reports completion.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the session manager and controller need to drive one account.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Login entry point; the no-session form returning to the system
	/// summary page after authentication.
	pub login_url: String,
	/// Page identity expected before credentials are submitted.
	pub login_page_identity: String,
	/// Page identity expected after a successful login.
	pub landing_page_identity: String,
	/// Bound for a control to become interactable.
	pub element_timeout: Duration,
	/// Bound for the in-progress indicator to clear after a confirmed action.
	pub completion_timeout: Duration,
	pub locators: LocatorTable,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			login_url: "https://www.alarm.com/login?m=no_session&ReturnUrl=/web/Security/SystemSummary.aspx".to_string(),
			login_page_identity: "Customer Login".to_string(),
			landing_page_identity: "Current System Status".to_string(),
			element_timeout: DEFAULT_ELEMENT_TIMEOUT,
			completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
			locators: LocatorTable::default(),
		}
	}
}
