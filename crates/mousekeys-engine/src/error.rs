//! Error types for the tick engine.

use std::path::PathBuf;

use mousekeys_curves::CurveError;
use thiserror::Error;

use crate::profile::ProfileKind;

/// Errors raised while building or loading an engine configuration.
///
/// Ticking never fails; all of these come from configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A profile's movement config failed validation.
    #[error("invalid {profile} profile: {source}")]
    InvalidProfile {
        /// Which profile was rejected
        profile: ProfileKind,
        /// Underlying validation failure
        #[source]
        source: CurveError,
    },

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// YAML config could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON config could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension does not name a supported format.
    #[error("unsupported config format for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_display() {
        let err = EngineError::InvalidProfile {
            profile: ProfileKind::Scroll,
            source: CurveError::ZeroRampDuration,
        };
        let msg = err.to_string();
        assert!(msg.contains("scroll"));
        assert!(msg.contains("time_to_max_speed_ms"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = EngineError::UnsupportedFormat(PathBuf::from("keys.toml"));
        assert!(err.to_string().contains("keys.toml"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = EngineError::InvalidProfile {
            profile: ProfileKind::Pointer,
            source: CurveError::InvalidExponent(-1.0),
        };
        assert!(err.source().is_some());
    }
}
