mod cli;
mod demo;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use quickpick::logging;
use settings::ResolvedConfig;
use workflow::DemoWorkflow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	logging::initialize();
	let cli = parse_cli();

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_demo(resolved).await
}

/// Drive a picker session from stdin and print what the surface shows.
async fn run_demo(settings: ResolvedConfig) -> Result<()> {
	let workflow = DemoWorkflow::from_config(settings);
	let stdin = tokio::io::BufReader::new(tokio::io::stdin());
	let mut stdout = std::io::stdout();
	workflow.run(stdin, &mut stdout).await
}
