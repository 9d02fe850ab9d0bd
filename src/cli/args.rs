//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check which ScyllaDB features a cluster version supports.
#[derive(Debug, Parser)]
#[command(name = "scylla-features")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print nothing; report the result through the exit code only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a version supports a feature
    Check(CheckArgs),

    /// List known features and their minimal versions
    List(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Feature identifier, e.g. ReplacingNodeUsingHostID
    pub feature: String,

    /// ScyllaDB version to check, e.g. 5.2.0 or 2023.1.0
    #[arg(long, value_name = "VERSION", env = "SCYLLA_VERSION")]
    pub scylla_version: Option<String>,

    /// ScyllaCluster manifest to read spec.version from (takes precedence over --scylla-version)
    #[arg(long, value_name = "FILE")]
    pub cluster: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
