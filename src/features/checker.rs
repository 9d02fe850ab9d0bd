//! Feature support queries.
//!
//! A cluster version supports a feature when it is at or above the
//! feature's threshold for the version's own [`Track`]. The other track's
//! threshold is never consulted.
//!
//! # Example
//!
//! ```
//! use scylla_features::features::{supports, Feature};
//!
//! assert!(supports("5.2.0", Feature::ReplacingNodeUsingHostID).unwrap());
//! assert!(!supports("2022.9.9", Feature::ReplacingNodeUsingHostID).unwrap());
//! ```

use semver::Version;
use serde::Serialize;
use tracing::debug;

use crate::error::{FeatureError, Result};

use super::{Feature, Track};

/// Outcome of a support check, with the values that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportReport {
    /// The feature that was checked.
    pub feature: Feature,
    /// The parsed cluster version.
    pub version: Version,
    /// Track the version was classified into.
    pub track: Track,
    /// Threshold of that track for the feature.
    pub minimal_version: Version,
    /// Whether the feature is available.
    pub supported: bool,
}

/// Check `feature` against a cluster version string.
///
/// # Errors
///
/// Returns `InvalidVersion` if `version` is not a semantic version.
pub fn check(version: &str, feature: Feature) -> Result<SupportReport> {
    let parsed = parse_version(version)?;
    let track = Track::of(&parsed);
    let minimal_version = feature.minimal_versions().for_track(track).clone();
    let supported = parsed >= minimal_version;

    debug!(
        %feature,
        version = %parsed,
        %track,
        minimal = %minimal_version,
        supported,
        "evaluated feature support"
    );

    Ok(SupportReport {
        feature,
        version: parsed,
        track,
        minimal_version,
        supported,
    })
}

/// Whether a cluster running `version` supports `feature`.
///
/// # Errors
///
/// Returns `InvalidVersion` if `version` is not a semantic version.
pub fn supports(version: &str, feature: Feature) -> Result<bool> {
    check(version, feature).map(|report| report.supported)
}

/// Like [`supports`], but looks the feature up by its identifier first.
///
/// # Errors
///
/// Returns `UnknownFeature` if `feature` is not registered, regardless of
/// the version. Otherwise returns `InvalidVersion` for a malformed version.
pub fn supports_by_name(version: &str, feature: &str) -> Result<bool> {
    let feature: Feature = feature.parse()?;
    supports(version, feature)
}

fn parse_version(version: &str) -> Result<Version> {
    Version::parse(version).map_err(|source| FeatureError::InvalidVersion {
        version: version.to_string(),
        source,
    })
}
