//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Relgate - Release gating and test workflow for Python packages.
#[derive(Debug, Parser)]
#[command(name = "relgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default relgate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Package name on the registry (overrides config)
    #[arg(long, global = true, env = "RELGATE_PACKAGE")]
    pub package: Option<String>,

    /// Registry base URL (overrides config)
    #[arg(long, global = true, env = "RELGATE_REGISTRY_URL")]
    pub registry_url: Option<String>,

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
    /// Format sources, then run the test suite and exit with its code
    Test(TestArgs),

    /// Fail if the local version is already released or behind the registry
    Release,

    /// Fail unless the local version is strictly ahead of the registry
    Prerelease,

    /// Print the local package version
    Version,

    /// Print the requirements declared by the project
    Requirements(RequirementsArgs),
}

/// Arguments for the `test` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TestArgs {
    /// Extra arguments for the test runner (after `--`)
    #[arg(last = true)]
    pub extra: Vec<String>,
}

/// Arguments for the `requirements` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RequirementsArgs {
    /// Also include development requirements
    #[arg(long)]
    pub dev: bool,
}
