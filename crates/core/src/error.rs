//! Crate error taxonomy.

use std::fmt;

use thiserror::Error;

use crate::driver::DriverError;
use crate::state::ActionRequest;

pub type Result<T, E = AdcError> = std::result::Result<T, E>;

/// Which step of an action sequence failed.
///
/// A primary or secondary failure means the action may never have started; a
/// completion-wait failure means it was issued but never confirmed, which is
/// not safe to blindly retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStep {
	Primary,
	Secondary,
	Completion,
}

impl fmt::Display for SequenceStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Primary => "primary control",
			Self::Secondary => "secondary confirmation",
			Self::Completion => "completion wait",
		};
		f.write_str(label)
	}
}

#[derive(Debug, Error)]
pub enum AdcError {
	/// Credentials rejected, or the login page was unreachable or no longer
	/// looks like the login page. Fatal to the attempted connect.
	#[error("login failed: {0}")]
	LoginFailure(String),

	/// Status could not be determined even after one reconnect-and-retry.
	#[error("alarm status unavailable after reconnect")]
	StatusUnavailable(#[source] DriverError),

	/// Arm requested while the system is not disarmed.
	#[error("system is already armed")]
	AlreadyArmed,

	/// Disarm requested while the system is already disarmed.
	#[error("system is already disarmed")]
	AlreadyDisarmed,

	/// A required control never became available during an action sequence,
	/// or the in-progress indicator never cleared.
	#[error("{step} unavailable during {action}")]
	ElementUnavailable {
		step: SequenceStep,
		action: ActionRequest,
		#[source]
		source: DriverError,
	},

	/// Driver failure outside the recoverable status-read path.
	#[error(transparent)]
	Driver(#[from] DriverError),
}
