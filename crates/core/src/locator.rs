//! Locator model for the remote UI's controls.
//!
//! The table of concrete element ids is external configuration: it defaults
//! to the ids the remote currently renders and can be overridden from JSON
//! when the site shifts, without touching control-flow code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Driver-opaque descriptor for one UI control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locator {
	/// Address by the element's `id` attribute.
	Id(String),
	/// Address by the element's `name` attribute.
	Name(String),
}

impl Locator {
	pub fn id(value: impl Into<String>) -> Self {
		Self::Id(value.into())
	}

	pub fn name(value: impl Into<String>) -> Self {
		Self::Name(value.into())
	}
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(v) => write!(f, "id={v}"),
			Self::Name(v) => write!(f, "name={v}"),
		}
	}
}

/// Controls driven by one arm/disarm action.
///
/// A secondary locator marks a two-click confirmation flow; its presence is
/// what selects the long completion wait in the action sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
	pub primary: Locator,
	#[serde(default)]
	pub secondary: Option<Locator>,
}

/// Every logical UI target the core touches, mapped to its locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorTable {
	pub login_username: Locator,
	pub login_password: Locator,
	pub login_submit: Locator,
	pub status_indicator: Locator,
	pub refresh: Locator,
	pub busy_indicator: Locator,
	pub disarm: ActionTarget,
	pub arm_stay: ActionTarget,
	pub arm_away: ActionTarget,
}

impl Default for LocatorTable {
	fn default() -> Self {
		Self {
			login_username: Locator::name("ctl00$ContentPlaceHolder1$loginform$txtUserName"),
			login_password: Locator::name("txtPassword"),
			login_submit: Locator::name("ctl00$ContentPlaceHolder1$loginform$signInButton"),
			status_indicator: Locator::id("ctl00_phBody_ArmingStateWidget_imgState"),
			refresh: Locator::id("ctl00_phBody_ArmingStateWidget_btnArmingRefresh"),
			busy_indicator: Locator::id("ctl00_phBody_ArmingStateWidget_imgPopupSpinner"),
			disarm: ActionTarget {
				primary: Locator::id("ctl00_phBody_ArmingStateWidget_btnDisarm"),
				secondary: None,
			},
			arm_stay: ActionTarget {
				primary: Locator::id("ctl00_phBody_ArmingStateWidget_btnArmStay"),
				secondary: Some(Locator::id("ctl00_phBody_ArmingStateWidget_btnArmOptionStay")),
			},
			arm_away: ActionTarget {
				primary: Locator::id("ctl00_phBody_ArmingStateWidget_btnArmAway"),
				secondary: Some(Locator::id("ctl00_phBody_ArmingStateWidget_btnArmOptionAway")),
			},
		}
	}
}

impl LocatorTable {
	/// Controls for the given action.
	pub fn target(&self, request: crate::state::ActionRequest) -> &ActionTarget {
		use crate::state::ActionRequest;
		match request {
			ActionRequest::Disarm => &self.disarm,
			ActionRequest::ArmStay => &self.arm_stay,
			ActionRequest::ArmAway => &self.arm_away,
		}
	}
}
