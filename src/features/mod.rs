//! Feature identifiers and their minimal supported versions.
//!
//! Every [`Feature`] carries a pair of thresholds, one per version
//! numbering [`Track`]. The table is an exhaustive `match`, so a new
//! variant does not compile until its thresholds are registered.
//!
//! # Modules
//!
//! - [`track`] - Open-source vs enterprise classification
//! - [`checker`] - The support query itself

pub mod checker;
pub mod track;

pub use checker::{check, supports, supports_by_name, SupportReport};
pub use track::{Track, ENTERPRISE_BOUNDARY};

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// A discrete ScyllaDB capability gated on the cluster version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    /// Replacing a dead node by its host ID instead of its address.
    ReplacingNodeUsingHostID,
}

impl Feature {
    /// All registered features, in declaration order.
    pub const ALL: &'static [Feature] = &[Feature::ReplacingNodeUsingHostID];

    /// Canonical identifier of the feature.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Feature::ReplacingNodeUsingHostID => "ReplacingNodeUsingHostID",
        }
    }

    /// Minimal versions, per track, from which this feature is available.
    pub const fn minimal_versions(&self) -> MinimalVersions {
        match self {
            Feature::ReplacingNodeUsingHostID => {
                MinimalVersions::new(Version::new(5, 2, 0), Version::new(2023, 1, 0))
            }
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| FeatureError::UnknownFeature {
                name: s.to_string(),
            })
    }
}

/// Minimal versions of a feature on each numbering track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalVersions {
    /// Threshold for open-source releases.
    pub open_source: Version,
    /// Threshold for enterprise releases.
    pub enterprise: Version,
}

impl MinimalVersions {
    /// Creates a threshold pair.
    pub const fn new(open_source: Version, enterprise: Version) -> Self {
        Self {
            open_source,
            enterprise,
        }
    }

    /// Threshold that applies to versions on `track`.
    ///
    /// Tracks never borrow each other's threshold.
    pub fn for_track(&self, track: Track) -> &Version {
        match track {
            Track::OpenSource => &self.open_source,
            Track::Enterprise => &self.enterprise,
        }
    }
}
