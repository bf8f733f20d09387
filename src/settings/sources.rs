use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use quickpick::app_dirs;

use crate::cli::CliArgs;

/// Prefix of configuration environment variables, e.g.
/// `QUICKPICK__DEMO__SLOW_DELAY_MS`.
const ENV_PREFIX: &str = "quickpick";

/// One source of configuration values, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigLayer {
	/// A default location; skipped when the file does not exist.
	DefaultFile(PathBuf),
	/// A file named with `--config`; must exist.
	ExplicitFile(PathBuf),
	/// `QUICKPICK__SECTION__KEY` variables.
	Environment,
}

/// Layers consulted for `cli`, in the order they are merged.
pub(super) fn layers(cli: &CliArgs) -> Vec<ConfigLayer> {
	let mut layers = Vec::new();
	if !cli.no_config {
		layers.extend(default_config_files().into_iter().map(ConfigLayer::DefaultFile));
	}
	layers.extend(cli.config.iter().cloned().map(ConfigLayer::ExplicitFile));
	layers.push(ConfigLayer::Environment);
	layers
}

pub(super) fn build_config(layers: Vec<ConfigLayer>) -> Result<Config> {
	let builder = layers
		.into_iter()
		.fold(Config::builder(), |builder, layer| match layer {
			ConfigLayer::DefaultFile(path) => builder.add_source(File::from(path).required(false)),
			ConfigLayer::ExplicitFile(path) => builder.add_source(File::from(path).required(true)),
			ConfigLayer::Environment => builder.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.separator("__")
					.try_parsing(true)
					.list_separator(","),
			),
		});

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// The per-user config file followed by the working directory variants.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".quickpick.toml"), dir.join("quickpick.toml")]);
	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn working_directory_files_are_defaults() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".quickpick.toml")));
		assert!(files.iter().any(|path| path.ends_with("quickpick.toml")));
	}

	#[test]
	fn explicit_files_follow_defaults_and_precede_environment() {
		let cli = CliArgs::try_parse_from(["quickpick", "--config", "extra.toml"]).expect("parse");
		let layers = layers(&cli);

		assert!(matches!(layers.first(), Some(ConfigLayer::DefaultFile(_))));
		assert_eq!(
			&layers[layers.len() - 2..],
			&[
				ConfigLayer::ExplicitFile(PathBuf::from("extra.toml")),
				ConfigLayer::Environment,
			]
		);
	}

	#[test]
	fn no_config_skips_default_files() {
		let cli = CliArgs::try_parse_from(["quickpick", "--no-config"]).expect("parse");
		assert_eq!(layers(&cli), vec![ConfigLayer::Environment]);
	}
}
