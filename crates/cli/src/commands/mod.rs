//! Command dispatch.

use adc_core::{AdcError, AlarmController};
use tracing::info;

use crate::cli::Commands;
use crate::driver::WebDriverFactory;

pub async fn dispatch(command: Commands, controller: &mut AlarmController<WebDriverFactory>) -> Result<(), AdcError> {
	match command {
		Commands::Status => {
			let state = controller.status().await?;
			println!("{state}");
		}
		Commands::ArmStay => {
			controller.arm_stay().await?;
			info!(target = "adc", "system armed in stay mode");
			println!("armed stay");
		}
		Commands::ArmAway => {
			controller.arm_away().await?;
			info!(target = "adc", "system armed in away mode");
			println!("armed away");
		}
		Commands::Disarm => {
			controller.disarm().await?;
			info!(target = "adc", "system disarmed");
			println!("disarmed");
		}
	}
	Ok(())
}
