//! Cluster manifest loading.

use std::fs;
use std::path::Path;

use crate::cluster::schema::ScyllaCluster;
use crate::error::{FeatureError, Result};

/// Load a cluster manifest from `path`.
///
/// # Errors
///
/// Returns `ClusterNotFound` if the file doesn't exist.
/// Returns `ClusterParseError` if the YAML is invalid or lacks `spec.version`.
pub fn load_cluster_file(path: &Path) -> Result<ScyllaCluster> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FeatureError::ClusterNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FeatureError::Io(e)
        }
    })?;

    tracing::debug!("Loaded cluster manifest from {}", path.display());
    parse_cluster(&content, path)
}

/// Parse YAML content into a [`ScyllaCluster`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_cluster(content: &str, source_path: &Path) -> Result<ScyllaCluster> {
    serde_yaml::from_str(content).map_err(|e| FeatureError::ClusterParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
