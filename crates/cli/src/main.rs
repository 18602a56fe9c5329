use std::time::Duration;

use adc_cli::cli::Cli;
use adc_cli::driver::WebDriverFactory;
use adc_cli::{commands, logging};
use adc_core::locator::LocatorTable;
use adc_core::session::Credentials;
use adc_core::{AlarmController, ClientConfig};
use anyhow::Context;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = run(cli).await {
		error!(target = "adc", error = %format!("{err:#}"), "command failed");
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> anyhow::Result<()> {
	let mut config = ClientConfig {
		element_timeout: Duration::from_secs(cli.timeout),
		completion_timeout: Duration::from_secs(cli.completion_timeout),
		..ClientConfig::default()
	};
	if let Some(path) = &cli.locators {
		let raw = std::fs::read_to_string(path).with_context(|| format!("reading locator file {}", path.display()))?;
		config.locators = serde_json::from_str::<LocatorTable>(&raw).with_context(|| format!("parsing locator file {}", path.display()))?;
	}

	let factory = WebDriverFactory::new(&cli.webdriver);
	let credentials = Credentials::new(cli.username, cli.password);
	let mut controller = AlarmController::new(factory, credentials, config);

	commands::dispatch(cli.command, &mut controller).await?;
	Ok(())
}
