//! Error types for scene loading and transform evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while loading or building a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Kernel or validation error.
    #[error(transparent)]
    Math(#[from] gltut_core::Error),
}

impl SceneError {
    /// Returns `true` if the config could not be read or parsed.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Yaml(_) | Self::ConfigNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_is_transparent() {
        let err: SceneError = gltut_core::Error::invalid_config("camera.near", "must be positive").into();
        assert_eq!(
            err.to_string(),
            "invalid config value for `camera.near`: must be positive"
        );
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_not_found() {
        let err = SceneError::ConfigNotFound {
            path: PathBuf::from("missing.yaml"),
        };
        assert!(err.to_string().contains("missing.yaml"));
        assert!(err.is_load_error());
    }
}
