//! Configuration loading and resolution for the demo binary.
//!
//! `load` layers default config files, `--config` files and `QUICKPICK__*`
//! environment variables, applies CLI overrides and validates the result.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use raw::RawConfig;
pub(crate) use resolved::ResolvedConfig;

/// Merge every configuration layer for `cli` and resolve the result.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(sources::layers(cli))?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests;
