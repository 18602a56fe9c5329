//! Account credentials.

use std::fmt;

/// Username and password for one remote account.
///
/// Immutable for the lifetime of the session manager that owns it. The
/// password never appears in Debug output or log records.
#[derive(Clone)]
pub struct Credentials {
	username: String,
	password: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub(crate) fn password(&self) -> &str {
		&self.password
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}
