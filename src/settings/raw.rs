use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::{CliArgs, OutputFormat};

const DEFAULT_SLOW_DELAY_MS: u64 = 300;

const DEFAULT_WORDS: &[&str] = &[
	"alpha", "alphabet", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
	"india", "juliet", "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo",
	"sierra", "tango", "uniform", "victor", "whiskey", "xray", "yankee", "zulu",
];

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	demo: DemoSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickerSection {
	prefix: Option<String>,
	accept_in_background: Option<bool>,
	no_results: Option<String>,
	output: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DemoSection {
	slow_delay_ms: Option<u64>,
	words: Option<Vec<String>>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(prefix) = &cli.prefix {
			self.picker.prefix = Some(prefix.clone());
		}
		if cli.accept_in_background {
			self.picker.accept_in_background = Some(true);
		}
		if let Some(label) = &cli.no_results {
			self.picker.no_results = Some(label.clone());
		}
		if let Some(output) = cli.output {
			self.picker.output = Some(output);
		}
		if let Some(delay) = cli.slow_delay_ms {
			self.demo.slow_delay_ms = Some(delay);
		}
	}

	/// Convert into a [`ResolvedConfig`], filling defaults and validating.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			slow_delay: detect_source(
				cli.slow_delay_ms.is_some(),
				self.demo.slow_delay_ms.is_some(),
				"QUICKPICK__DEMO__SLOW_DELAY_MS",
				"--slow-delay-ms",
				"demo.slow_delay_ms",
			),
			no_results: detect_source(
				cli.no_results.is_some(),
				self.picker.no_results.is_some(),
				"QUICKPICK__PICKER__NO_RESULTS",
				"--no-results",
				"picker.no_results",
			),
		};

		let words = self
			.demo
			.words
			.unwrap_or_else(|| DEFAULT_WORDS.iter().map(|word| (*word).to_owned()).collect());

		let config = ResolvedConfig {
			prefix: self.picker.prefix.unwrap_or_default(),
			accept_in_background: self.picker.accept_in_background.unwrap_or(false),
			no_results: self.picker.no_results,
			output: self.picker.output.unwrap_or_default(),
			slow_delay: Duration::from_millis(
				self.demo.slow_delay_ms.unwrap_or(DEFAULT_SLOW_DELAY_MS),
			),
			words,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
