//! Error types for feature support checks.
//!
//! This module defines [`FeatureError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `UnknownFeature` means a feature name was referenced that has no
//!   registered thresholds. That is a caller defect and is never retried.
//! - `InvalidVersion` means the version string itself is malformed, usually
//!   a misconfigured cluster specification.
//! - Use `anyhow::Error` (via `FeatureError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for feature support checks.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// No minimal version constraints are registered for this feature name.
    #[error("unable to find minimal version constraints, unknown feature {name:?}")]
    UnknownFeature { name: String },

    /// The cluster version string is not a semantic version.
    #[error("can't parse ScyllaDB version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Cluster manifest not found at the given location.
    #[error("Cluster manifest not found: {path}")]
    ClusterNotFound { path: PathBuf },

    /// Failed to parse a cluster manifest.
    #[error("Failed to parse cluster manifest at {path}: {message}")]
    ClusterParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for feature support checks.
pub type Result<T> = std::result::Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unknown_feature_displays_name() {
        let err = FeatureError::UnknownFeature {
            name: "TabletsEverywhere".into(),
        };
        assert!(err.to_string().contains("\"TabletsEverywhere\""));
    }

    #[test]
    fn invalid_version_displays_input_and_keeps_source() {
        let source = semver::Version::parse("not-a-version").unwrap_err();
        let err = FeatureError::InvalidVersion {
            version: "not-a-version".into(),
            source,
        };
        assert!(err.to_string().contains("\"not-a-version\""));
        assert!(err.source().is_some());
    }

    #[test]
    fn cluster_parse_error_displays_path_and_message() {
        let err = FeatureError::ClusterParseError {
            path: PathBuf::from("/cluster.yaml"),
            message: "missing field `version`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cluster.yaml"));
        assert!(msg.contains("missing field `version`"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FeatureError = io_err.into();
        assert!(matches!(err, FeatureError::Io(_)));
    }
}
