use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::cli::OutputFormat;

/// Upper bound for the demo provider's slow pick delay.
const MAX_SLOW_DELAY: Duration = Duration::from_secs(60);

/// Application-ready configuration.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) prefix: String,
	pub(crate) accept_in_background: bool,
	pub(crate) no_results: Option<String>,
	pub(crate) output: OutputFormat,
	pub(crate) slow_delay: Duration,
	pub(crate) words: Vec<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		if self.slow_delay > MAX_SLOW_DELAY {
			return Err(ConfigError::invalid(
				"demo.slow_delay_ms",
				self.slow_delay.as_millis().to_string(),
				sources.source_for_slow_delay(),
				"must not exceed 60000",
			));
		}

		if let Some(label) = &self.no_results
			&& label.trim().is_empty()
		{
			return Err(ConfigError::invalid(
				"picker.no_results",
				label.clone(),
				sources.source_for_no_results(),
				"must not be blank",
			));
		}

		Ok(())
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		eprintln!("quickpick configuration:");
		eprintln!("  picker.prefix: {:?}", self.prefix);
		eprintln!(
			"  picker.accept_in_background: {}",
			self.accept_in_background
		);
		eprintln!(
			"  picker.no_results: {}",
			self.no_results.as_deref().unwrap_or("(none)")
		);
		eprintln!("  picker.output: {}", self.output.as_str());
		eprintln!("  demo.slow_delay_ms: {}", self.slow_delay.as_millis());
		eprintln!("  demo.words: {} entries", self.words.len());
	}
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) slow_delay: Option<SettingSource>,
	pub(crate) no_results: Option<SettingSource>,
}

impl ConfigSources {
	fn source_for_slow_delay(&self) -> SettingSource {
		self.slow_delay
			.clone()
			.unwrap_or(SettingSource::ConfigKey("demo.slow_delay_ms"))
	}

	fn source_for_no_results(&self) -> SettingSource {
		self.no_results
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.no_results"))
	}
}
