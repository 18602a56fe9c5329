//! Alarm state as reported by the remote UI, and the requests that change it.

use std::fmt;

/// Security-system status parsed from the remote status indicator.
///
/// Never cached across calls: the panel can change state out-of-band (a
/// physical keypad, another client), so every decision re-reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
	Disarmed,
	ArmedStay,
	ArmedAway,
	/// The indicator carried text this client does not recognize.
	Unknown,
}

impl AlarmState {
	/// Parses the status indicator's `alt` text.
	pub fn parse(raw: &str) -> Self {
		match raw.trim() {
			"Disarmed" => Self::Disarmed,
			"Armed Stay" => Self::ArmedStay,
			"Armed Away" => Self::ArmedAway,
			_ => Self::Unknown,
		}
	}

	pub fn is_disarmed(self) -> bool {
		self == Self::Disarmed
	}
}

impl fmt::Display for AlarmState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Disarmed => "disarmed",
			Self::ArmedStay => "armed stay",
			Self::ArmedAway => "armed away",
			Self::Unknown => "unknown",
		};
		f.write_str(label)
	}
}

/// A state-changing request; validity depends on the current [`AlarmState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
	Disarm,
	ArmStay,
	ArmAway,
}

impl ActionRequest {
	pub fn label(self) -> &'static str {
		match self {
			Self::Disarm => "disarm",
			Self::ArmStay => "arm stay",
			Self::ArmAway => "arm away",
		}
	}
}

impl fmt::Display for ActionRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
