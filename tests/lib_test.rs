//! Library integration tests.

use scylla_features::cluster::ScyllaCluster;
use scylla_features::features::{check, Track, ENTERPRISE_BOUNDARY};
use scylla_features::{supports, supports_by_name, Feature, FeatureError};

const FEATURE: Feature = Feature::ReplacingNodeUsingHostID;

#[test]
fn documented_scenarios() {
    assert!(supports("5.2.0", FEATURE).unwrap());
    assert!(!supports("5.1.9", FEATURE).unwrap());
    assert!(supports("2023.1.0", FEATURE).unwrap());
    assert!(!supports("2022.9.9", FEATURE).unwrap());
    assert!(matches!(
        supports("not-a-version", FEATURE),
        Err(FeatureError::InvalidVersion { .. })
    ));
    assert!(matches!(
        supports_by_name("5.2.0", "UnknownFeature"),
        Err(FeatureError::UnknownFeature { .. })
    ));
}

#[test]
fn open_source_track_compares_against_open_source_threshold() {
    for feature in Feature::ALL {
        let threshold = feature.minimal_versions().open_source;
        for version in ["0.1.0", "4.6.11", "5.1.9", "5.2.0", "5.2.1", "5.4.0", "1999.0.0"] {
            let parsed = semver::Version::parse(version).unwrap();
            assert_eq!(Track::of(&parsed), Track::OpenSource);
            assert_eq!(
                supports(version, *feature).unwrap(),
                parsed >= threshold,
                "{feature} at {version}"
            );
        }
    }
}

#[test]
fn enterprise_track_compares_against_enterprise_threshold() {
    for feature in Feature::ALL {
        let threshold = feature.minimal_versions().enterprise;
        for version in ["2000.0.0", "2021.1.0", "2022.9.9", "2023.1.0", "2024.1.0"] {
            let parsed = semver::Version::parse(version).unwrap();
            assert_eq!(Track::of(&parsed), Track::Enterprise);
            assert_eq!(
                supports(version, *feature).unwrap(),
                parsed >= threshold,
                "{feature} at {version}"
            );
        }
    }
}

#[test]
fn boundary_version_is_enterprise_and_below_threshold() {
    let report = check(&ENTERPRISE_BOUNDARY.to_string(), FEATURE).unwrap();
    assert_eq!(report.track, Track::Enterprise);
    assert!(!report.supported);
}

#[test]
fn unknown_feature_ignores_version() {
    for version in ["5.2.0", "2023.1.0", "garbage", ""] {
        assert!(matches!(
            supports_by_name(version, "NotAFeature"),
            Err(FeatureError::UnknownFeature { .. })
        ));
    }
}

#[test]
fn malformed_version_fails_for_every_feature() {
    for feature in Feature::ALL {
        assert!(matches!(
            supports("5.x", *feature),
            Err(FeatureError::InvalidVersion { .. })
        ));
    }
}

#[test]
fn cluster_checks_its_own_version() {
    let cluster = ScyllaCluster::with_version("2023.1.1");
    assert!(cluster.supports(FEATURE).unwrap());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use scylla_features::cli::{Cli, Commands};

    let cli = Cli::parse_from(["scylla-features", "list", "--json"]);
    if let Commands::List(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}
