//! ScyllaDB feature capability lookup.
//!
//! Given the version a ScyllaDB cluster declares and a named feature, decide
//! whether that version supports the feature. Open-source and enterprise
//! releases are numbered on separate tracks, and each track has its own
//! minimal version per feature.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`cluster`] - ScyllaCluster manifest loading
//! - [`error`] - Error types and result aliases
//! - [`features`] - Feature table, track classification and support checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use scylla_features::features::{supports, Feature};
//!
//! let feature = Feature::ReplacingNodeUsingHostID;
//! assert!(supports("5.2.0", feature).unwrap());
//! assert!(!supports("5.1.9", feature).unwrap());
//! assert!(supports("2023.1.0", feature).unwrap());
//! ```

pub mod cli;
pub mod cluster;
pub mod error;
pub mod features;
pub mod ui;

pub use error::{FeatureError, Result};
pub use features::{supports, supports_by_name, Feature};
