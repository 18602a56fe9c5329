//! The arming state machine driven over a live session.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::driver::{DriverError, DriverFactory, Element};
use crate::error::{AdcError, Result, SequenceStep};
use crate::session::{Credentials, SessionManager};
use crate::state::{ActionRequest, AlarmState};

/// Exposes `status`, `disarm`, `arm_stay`, and `arm_away` with precondition
/// checks and resilient reads.
///
/// Takes `&mut self` for every operation: the underlying browser context is
/// not safe for concurrent interaction, so concurrent callers must hold one
/// controller each behind an external lock.
pub struct AlarmController<F: DriverFactory> {
	manager: SessionManager<F>,
	config: Arc<ClientConfig>,
}

impl<F: DriverFactory> AlarmController<F> {
	pub fn new(factory: F, credentials: Credentials, config: ClientConfig) -> Self {
		let config = Arc::new(config);
		Self {
			manager: SessionManager::new(factory, credentials, Arc::clone(&config)),
			config,
		}
	}

	/// Current alarm state, re-read from the remote after a forced refresh.
	///
	/// One transient driver failure is recovered by reconnecting and
	/// re-reading once; a second failure surfaces as
	/// [`AdcError::StatusUnavailable`]. The cap keeps a broken remote from
	/// turning into an unbounded reconnect loop.
	pub async fn status(&mut self) -> Result<AlarmState> {
		match self.read_state().await {
			Ok(state) => Ok(state),
			Err(AdcError::Driver(e)) if e.is_transient() => {
				warn!(target = "adc", error = %e, "status read failed; reconnecting");
				self.manager.reconnect().await?;
				match self.read_state().await {
					Ok(state) => Ok(state),
					Err(AdcError::Driver(e)) => Err(AdcError::StatusUnavailable(e)),
					Err(other) => Err(other),
				}
			}
			Err(other) => Err(other),
		}
	}

	/// Disarms the system; rejected with [`AdcError::AlreadyDisarmed`] when
	/// it already is.
	pub async fn disarm(&mut self) -> Result<()> {
		let state = self.status().await?;
		if state.is_disarmed() {
			return Err(AdcError::AlreadyDisarmed);
		}
		info!(target = "adc", %state, "disarming system");
		self.run_sequence(ActionRequest::Disarm).await
	}

	/// Arms the system in stay mode; rejected with
	/// [`AdcError::AlreadyArmed`] unless currently disarmed.
	pub async fn arm_stay(&mut self) -> Result<()> {
		self.arm(ActionRequest::ArmStay).await
	}

	/// Arms the system in away mode; rejected with
	/// [`AdcError::AlreadyArmed`] unless currently disarmed.
	pub async fn arm_away(&mut self) -> Result<()> {
		self.arm(ActionRequest::ArmAway).await
	}

	async fn arm(&mut self, request: ActionRequest) -> Result<()> {
		let state = self.status().await?;
		if !state.is_disarmed() {
			return Err(AdcError::AlreadyArmed);
		}
		info!(target = "adc", action = %request, "arming system");
		self.run_sequence(request).await
	}

	/// Forces a refresh and reads the status indicator.
	async fn read_state(&mut self) -> Result<AlarmState> {
		let config = Arc::clone(&self.config);
		let session = self.manager.session().await?;

		// The panel can be changed from a physical keypad; the refresh click
		// makes the server re-render the real state instead of a stale view.
		let refresh = session.find(&config.locators.refresh, config.element_timeout).await?;
		refresh.click().await?;

		let indicator = session.find(&config.locators.status_indicator, config.element_timeout).await?;
		let raw = indicator.read_attribute("alt").await?.unwrap_or_default();
		let state = AlarmState::parse(&raw);
		debug!(target = "adc", %raw, %state, "alarm state read");
		Ok(state)
	}

	/// Drives the click/wait steps for one action.
	///
	/// Failures here are never retried: a missing control means the remote
	/// UI no longer matches the locator table, and a second click after an
	/// unconfirmed action could double-toggle the panel.
	async fn run_sequence(&mut self, request: ActionRequest) -> Result<()> {
		let config = Arc::clone(&self.config);
		let target = config.locators.target(request);
		let session = self.manager.session().await?;

		let primary = session
			.find(&target.primary, config.element_timeout)
			.await
			.map_err(|e| sequence_error(SequenceStep::Primary, request, e))?;
		primary.click().await.map_err(|e| sequence_error(SequenceStep::Primary, request, e))?;

		let Some(secondary) = target.secondary.as_ref() else {
			info!(target = "adc", action = %request, "action issued");
			return Ok(());
		};

		debug!(target = "adc", action = %request, "confirming via secondary control");
		let confirm = session
			.find(secondary, config.element_timeout)
			.await
			.map_err(|e| sequence_error(SequenceStep::Secondary, request, e))?;
		confirm.click().await.map_err(|e| sequence_error(SequenceStep::Secondary, request, e))?;

		session
			.wait_gone(&config.locators.busy_indicator, config.completion_timeout)
			.await
			.map_err(|e| sequence_error(SequenceStep::Completion, request, e))?;

		info!(target = "adc", action = %request, "action confirmed by remote");
		Ok(())
	}
}

fn sequence_error(step: SequenceStep, action: ActionRequest, source: DriverError) -> AdcError {
	AdcError::ElementUnavailable { step, action, source }
}
