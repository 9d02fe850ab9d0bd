//! Version numbering tracks.
//!
//! Open-source and enterprise ScyllaDB releases share one version space.
//! Enterprise releases are numbered by year (`2023.1.0`), so anything at
//! or above [`ENTERPRISE_BOUNDARY`] is enterprise.

use std::fmt;

use semver::Version;
use serde::Serialize;

/// Lowest version classified as enterprise.
pub const ENTERPRISE_BOUNDARY: Version = Version::new(2000, 0, 0);

/// The numbering track a version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// Below the enterprise boundary.
    OpenSource,
    /// At or above the enterprise boundary.
    Enterprise,
}

impl Track {
    /// Classifies `version` using full semver ordering against the boundary.
    pub fn of(version: &Version) -> Self {
        if *version >= ENTERPRISE_BOUNDARY {
            Track::Enterprise
        } else {
            Track::OpenSource
        }
    }

    /// Human-readable track name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::OpenSource => "open-source",
            Track::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
