//! Validate a config file

use std::path::Path;

use anyhow::Result;
use mousekeys_engine::MouseKeysConfig;
use tracing::info;

use crate::error::CliError;
use crate::output;

/// Execute the validate command
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let config = MouseKeysConfig::load(path).map_err(CliError::from)?;
    info!(path = %path.display(), "config is valid");
    output::print_config(path, &config, json)
}
