//! Cluster specification input.
//!
//! Feature checks are usually driven by a ScyllaCluster manifest, where the
//! version lives at `spec.version`.
//!
//! # Modules
//!
//! - [`schema`] - Manifest types
//! - [`loader`] - Reading manifests from disk

pub mod loader;
pub mod schema;

pub use loader::{load_cluster_file, parse_cluster};
pub use schema::{ClusterMetadata, ClusterSpec, ScyllaCluster};
