use std::fs;
use std::time::Duration;

use clap::Parser;
use tempfile::TempDir;

use super::load;
use crate::cli::{CliArgs, OutputFormat};

fn write_config(dir: &TempDir, contents: &str) -> String {
	let path = dir.path().join("quickpick.toml");
	fs::write(&path, contents).expect("write config");
	path.display().to_string()
}

#[test]
fn defaults_apply_without_files() {
	let cli = CliArgs::try_parse_from(["quickpick", "--no-config"]).expect("parse");
	let config = load(&cli).expect("load");

	assert_eq!(config.prefix, "");
	assert!(!config.accept_in_background);
	assert_eq!(config.no_results, None);
	assert_eq!(config.output, OutputFormat::Plain);
	assert_eq!(config.slow_delay, Duration::from_millis(300));
	assert!(config.words.iter().any(|word| word == "alpha"));
}

#[test]
fn config_file_values_are_used() {
	let dir = TempDir::new().expect("tempdir");
	let path = write_config(
		&dir,
		r#"
[picker]
prefix = ">"
accept_in_background = true
no_results = "Nothing here"
output = "json"

[demo]
slow_delay_ms = 120
words = ["one", "two"]
"#,
	);
	let cli = CliArgs::try_parse_from(["quickpick", "--no-config", "--config", &path])
		.expect("parse");

	let config = load(&cli).expect("load");

	assert_eq!(config.prefix, ">");
	assert!(config.accept_in_background);
	assert_eq!(config.no_results.as_deref(), Some("Nothing here"));
	assert_eq!(config.output, OutputFormat::Json);
	assert_eq!(config.slow_delay, Duration::from_millis(120));
	assert_eq!(config.words, vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn cli_flags_override_config_file() {
	let dir = TempDir::new().expect("tempdir");
	let path = write_config(&dir, "[demo]\nslow_delay_ms = 120\n");
	let cli = CliArgs::try_parse_from([
		"quickpick",
		"--no-config",
		"--config",
		&path,
		"--slow-delay-ms",
		"40",
		"--prefix",
		"#",
	])
	.expect("parse");

	let config = load(&cli).expect("load");

	assert_eq!(config.slow_delay, Duration::from_millis(40));
	assert_eq!(config.prefix, "#");
}

#[test]
fn excessive_delay_reports_its_source() {
	let cli = CliArgs::try_parse_from(["quickpick", "--no-config", "--slow-delay-ms", "90000"])
		.expect("parse");

	let message = load(&cli).unwrap_err().to_string();

	assert!(message.contains("demo.slow_delay_ms"));
	assert!(message.contains("CLI flag `--slow-delay-ms`"));
	assert!(message.contains("value: 90000"));
}

#[test]
fn blank_no_results_label_is_rejected() {
	let dir = TempDir::new().expect("tempdir");
	let path = write_config(&dir, "[picker]\nno_results = \"  \"\n");
	let cli = CliArgs::try_parse_from(["quickpick", "--no-config", "--config", &path])
		.expect("parse");

	let message = load(&cli).unwrap_err().to_string();

	assert!(message.contains("picker.no_results"));
	assert!(message.contains("configuration key"));
}

#[test]
fn missing_explicit_config_file_fails() {
	let dir = TempDir::new().expect("tempdir");
	let missing = dir.path().join("absent.toml").display().to_string();
	let cli = CliArgs::try_parse_from(["quickpick", "--no-config", "--config", &missing])
		.expect("parse");

	assert!(load(&cli).is_err());
}
