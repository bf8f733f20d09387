use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quickpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "quickpick",
	version,
	long_version = long_version(),
	about = "Drive an incremental picker from stdin, one query per line",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QUICKPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Prefix stripped from each query before filtering (default: none)"
	)]
	pub(crate) prefix: Option<String>,
	#[arg(
		short = 'b',
		long = "accept-in-background",
		help = "Keep the picker open when accepting with :accept-bg (default: disabled)"
	)]
	pub(crate) accept_in_background: bool,
	#[arg(
		short = 'd',
		long = "slow-delay-ms",
		value_name = "MILLIS",
		help = "Delay before the demo provider's slow picks resolve (default: 300)"
	)]
	pub(crate) slow_delay_ms: Option<u64>,
	#[arg(
		long = "no-results",
		value_name = "LABEL",
		help = "Label shown when a query yields no picks (default: none)"
	)]
	pub(crate) no_results: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		help = "Output format for surface events (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(long = "print-config", help = "Print the resolved configuration to stderr")]
	pub(crate) print_config: bool,
}
