//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adc", about = "Control an alarm.com account through its web UI", version)]
pub struct Cli {
	/// Account username.
	#[arg(long, env = "ALARMDOTCOM_USERNAME")]
	pub username: String,

	/// Account password.
	#[arg(long, env = "ALARMDOTCOM_PASSWORD", hide_env_values = true)]
	pub password: String,

	/// WebDriver endpoint to drive the browser through.
	#[arg(long, default_value = "http://localhost:4444")]
	pub webdriver: String,

	/// JSON file overriding individual UI locators.
	#[arg(long)]
	pub locators: Option<PathBuf>,

	/// Bound in seconds for a control to become interactable.
	#[arg(long, default_value_t = 5)]
	pub timeout: u64,

	/// Bound in seconds for an arm action to confirm completion.
	#[arg(long, default_value_t = 10)]
	pub completion_timeout: u64,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
	/// Print the current alarm state.
	Status,
	/// Arm the system in stay mode.
	ArmStay,
	/// Arm the system in away mode.
	ArmAway,
	/// Disarm the system.
	Disarm,
}
