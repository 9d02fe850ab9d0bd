//! Check command implementation.
//!
//! The `scylla-features check` command answers whether a cluster version
//! supports a feature. The exit code carries the answer: 0 when supported,
//! 1 when not.

use anyhow::anyhow;

use crate::cli::args::CheckArgs;
use crate::cluster::load_cluster_file;
use crate::error::{FeatureError, Result};
use crate::features::{check, Feature};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_UNSUPPORTED};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// The version to check: the manifest's `spec.version` if `--cluster`
    /// was given, otherwise `--scylla-version` / `SCYLLA_VERSION`.
    fn resolve_version(&self) -> Result<String> {
        if let Some(path) = &self.args.cluster {
            let cluster = load_cluster_file(path)?;
            tracing::debug!(
                "Using version {} from cluster {}",
                cluster.spec.version,
                cluster.name()
            );
            return Ok(cluster.spec.version);
        }

        self.args.scylla_version.clone().ok_or_else(|| {
            FeatureError::Other(anyhow!(
                "no version given: pass --scylla-version, set SCYLLA_VERSION or pass --cluster"
            ))
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Unknown features are reported before the version is looked at.
        let feature: Feature = self.args.feature.parse()?;
        let version = self.resolve_version()?;
        let report = check(&version, feature)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| FeatureError::Other(e.into()))?;
            ui.message(&json);
        } else if report.supported {
            ui.success(&format!(
                "{} is supported by {} {} (requires >= {})",
                report.feature, report.track, report.version, report.minimal_version
            ));
        } else {
            ui.warning(&format!(
                "{} is not supported by {} {} (requires >= {})",
                report.feature, report.track, report.version, report.minimal_version
            ));
        }

        if report.supported {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_UNSUPPORTED))
        }
    }
}
