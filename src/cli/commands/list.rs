//! List command implementation.
//!
//! The `scylla-features list` command prints every registered feature
//! with its minimal version on each track.

use semver::Version;
use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{FeatureError, Result};
use crate::features::{Feature, MinimalVersions, ENTERPRISE_BOUNDARY};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON shape of the listing.
#[derive(Debug, Serialize)]
struct Listing {
    enterprise_boundary: Version,
    features: Vec<ListedFeature>,
}

#[derive(Debug, Serialize)]
struct ListedFeature {
    feature: Feature,
    #[serde(flatten)]
    minimal_versions: MinimalVersions,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let listing = Listing {
                enterprise_boundary: ENTERPRISE_BOUNDARY,
                features: Feature::ALL
                    .iter()
                    .map(|feature| ListedFeature {
                        feature: *feature,
                        minimal_versions: feature.minimal_versions(),
                    })
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| FeatureError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Enterprise boundary: {}", ENTERPRISE_BOUNDARY));
        for feature in Feature::ALL {
            let versions = feature.minimal_versions();
            ui.message("");
            ui.message(feature.as_str());
            ui.message(&format!("  open-source: {}", versions.open_source));
            ui.message(&format!("  enterprise:  {}", versions.enterprise));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_thresholds() {
        let mut ui = MockUI::new();
        let result = ListCommand::new(ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        insta::assert_snapshot!(ui.output(), @r"
        Enterprise boundary: 2000.0.0

        ReplacingNodeUsingHostID
          open-source: 5.2.0
          enterprise:  2023.1.0
        ");
    }

    #[test]
    fn lists_thresholds_as_json() {
        let mut ui = MockUI::new();
        ListCommand::new(ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(json["enterprise_boundary"], "2000.0.0");
        assert_eq!(json["features"][0]["feature"], "ReplacingNodeUsingHostID");
        assert_eq!(json["features"][0]["open_source"], "5.2.0");
        assert_eq!(json["features"][0]["enterprise"], "2023.1.0");
    }
}
