use clap::Parser;

use super::{CliArgs, OutputFormat};

#[test]
fn defaults_leave_overrides_unset() {
	let cli = CliArgs::try_parse_from(["quickpick"]).expect("parse");
	assert!(cli.config.is_empty());
	assert!(!cli.no_config);
	assert!(!cli.accept_in_background);
	assert_eq!(cli.prefix, None);
	assert_eq!(cli.slow_delay_ms, None);
	assert_eq!(cli.output, None);
}

#[test]
fn parses_picker_flags() {
	let cli = CliArgs::try_parse_from([
		"quickpick",
		"--prefix",
		">",
		"--accept-in-background",
		"--slow-delay-ms",
		"50",
		"--output",
		"json",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	])
	.expect("parse");

	assert_eq!(cli.prefix.as_deref(), Some(">"));
	assert!(cli.accept_in_background);
	assert_eq!(cli.slow_delay_ms, Some(50));
	assert_eq!(cli.output, Some(OutputFormat::Json));
	assert_eq!(cli.config.len(), 2);
}

#[test]
fn rejects_unknown_output_format() {
	assert!(CliArgs::try_parse_from(["quickpick", "--output", "yaml"]).is_err());
}
