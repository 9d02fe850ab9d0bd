//! ScyllaCluster manifest types.
//!
//! Only the fields needed to gate features are modelled. Unknown fields are
//! ignored so full Kubernetes manifests parse as-is.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::{self, Feature};

/// A ScyllaCluster resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScyllaCluster {
    /// Resource API version, e.g. `scylla.scylladb.com/v1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Resource kind, normally `ScyllaCluster`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ClusterMetadata,

    /// Desired cluster state.
    pub spec: ClusterSpec,
}

/// Object metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Desired cluster state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    /// ScyllaDB version the cluster runs, as written in the manifest.
    pub version: String,
}

impl ScyllaCluster {
    /// Create a cluster declaring `version`.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            api_version: None,
            kind: None,
            metadata: ClusterMetadata::default(),
            spec: ClusterSpec {
                version: version.into(),
            },
        }
    }

    /// Display name, falling back to `<unnamed>`.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Whether this cluster's version supports `feature`.
    pub fn supports(&self, feature: Feature) -> Result<bool> {
        features::supports(&self.spec.version, feature)
    }
}
