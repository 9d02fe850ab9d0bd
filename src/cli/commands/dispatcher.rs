//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a check whose feature is not supported.
pub const EXIT_UNSUPPORTED: i32 = 1;

/// Exit code for errors (unknown feature, invalid version, unreadable manifest).
pub const EXIT_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => super::check::CheckCommand::new(args.clone()).execute(ui),
            Commands::List(args) => super::list::ListCommand::new(args.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(EXIT_UNSUPPORTED);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatches_list() {
        let cli = Cli::parse_from(["scylla-features", "list"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.output().contains("ReplacingNodeUsingHostID"));
    }

    #[test]
    fn dispatches_check() {
        let cli = Cli::parse_from([
            "scylla-features",
            "check",
            "ReplacingNodeUsingHostID",
            "--scylla-version",
            "5.1.9",
        ]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();
        assert_eq!(result.exit_code, EXIT_UNSUPPORTED);
    }
}
