//! Two-profile engine configuration and loading.

use std::path::Path;

use mousekeys_curves::MovementConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::profile::ProfileKind;

/// Static configuration for both motion profiles.
///
/// Either section may be omitted in a file and falls back to the stock
/// profile (no delay, 300 ms quadratic ramp).
///
/// ```yaml
/// pointer:
///   delay_ms: 0
///   time_to_max_speed_ms: 300
///   acceleration_exponent: 2.0
/// scroll:
///   time_to_max_speed_ms: 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseKeysConfig {
    /// Pointer movement profile
    pub pointer: MovementConfig,
    /// Scroll profile
    pub scroll: MovementConfig,
}

/// Serialization formats accepted by [`MouseKeysConfig::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(EngineError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl MouseKeysConfig {
    /// Use the same movement config for both profiles.
    pub fn uniform(config: MovementConfig) -> Self {
        Self {
            pointer: config,
            scroll: config,
        }
    }

    /// Config of one profile.
    pub fn profile(&self, kind: ProfileKind) -> &MovementConfig {
        match kind {
            ProfileKind::Pointer => &self.pointer,
            ProfileKind::Scroll => &self.scroll,
        }
    }

    /// Validate both profiles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`] naming the first bad profile.
    pub fn validate(&self) -> EngineResult<()> {
        for kind in ProfileKind::ALL {
            self.profile(kind)
                .validate()
                .map_err(|source| EngineError::InvalidProfile {
                    profile: kind,
                    source,
                })?;
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Yaml`] on malformed input or
    /// [`EngineError::InvalidProfile`] if validation fails.
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Json`] on malformed input or
    /// [`EngineError::InvalidProfile`] if validation fails.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] for an unknown extension,
    /// [`EngineError::Io`] if the file cannot be read, or any parse or
    /// validation error from the chosen format.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };
        debug!(path = %path.display(), ?format, "loaded mouse keys config");
        Ok(config)
    }

    /// Render as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> EngineResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
