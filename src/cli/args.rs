// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for whoamictl.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// whoamictl - build, ship, and run the whoami homelab service
#[derive(Parser, Debug)]
#[command(name = "whoamictl")]
#[command(version, about = "Build, ship, and run the whoami homelab service")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the container image for the local build context
    Build,

    /// Push the built image to the registry
    Push,

    /// Restart the deployment in the cluster
    Rollout,

    /// Build, push, then rollout (stops at the first failing step)
    All,

    /// Run the built image as a foreground container on the homelab network
    #[command(name = "run-homelab", alias = "run_homelab")]
    RunHomelab,

    /// Run the web app locally with the Flask development server
    #[command(name = "run-local", alias = "run_local")]
    RunLocal,

    /// Apply the manifest directory to the cluster namespace
    Apply,

    /// Delete the manifest set from the cluster namespace
    Delete,

    /// Anything not in the fixed command set lands here and is rejected
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
