//! Session lifecycle subsystem.
//!
//! Owns the authenticated connection to the remote service: login, loss
//! detection hand-off, and transparent re-establishment.

/// Account credentials with a redacting Debug impl.
pub mod credentials;
/// Session handle and the manager that owns its lifecycle.
pub mod manager;

pub use credentials::Credentials;
pub use manager::{Session, SessionManager};
