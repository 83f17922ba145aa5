// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::error::ErrorKind;
use clap::Parser;
use whoamictl::cli::{Cli, Commands};

#[test]
fn test_parse_build_command() {
    let args = vec!["whoamictl", "build"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Build)));
}

#[test]
fn test_parse_push_command() {
    let args = vec!["whoamictl", "push"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Push)));
}

#[test]
fn test_parse_rollout_command() {
    let args = vec!["whoamictl", "rollout"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Rollout)));
}

#[test]
fn test_parse_all_command() {
    let args = vec!["whoamictl", "all"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::All)));
}

#[test]
fn test_parse_run_homelab_command() {
    let args = vec!["whoamictl", "run-homelab"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::RunHomelab)));
}

#[test]
fn test_parse_run_homelab_underscore_alias() {
    let args = vec!["whoamictl", "run_homelab"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::RunHomelab)));
}

#[test]
fn test_parse_run_local_command() {
    let args = vec!["whoamictl", "run-local"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::RunLocal)));
}

#[test]
fn test_parse_run_local_underscore_alias() {
    let args = vec!["whoamictl", "run_local"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::RunLocal)));
}

#[test]
fn test_parse_apply_command() {
    let args = vec!["whoamictl", "apply"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Apply)));
}

#[test]
fn test_parse_delete_command() {
    let args = vec!["whoamictl", "delete"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Delete)));
}

#[test]
fn test_parse_no_command_defaults_to_none() {
    let args = vec!["whoamictl"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_help_flag_is_usage_not_error() {
    for flag in ["-h", "--help"] {
        let err = Cli::try_parse_from(vec!["whoamictl", flag]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}

#[test]
fn test_unknown_command_is_captured() {
    // Unrecognized names are caught by Unknown(Vec<String>), not by clap's
    // own error path; main turns them into the Unknown-command exit.
    let args = vec!["whoamictl", "deploy", "--now"];
    let cli = Cli::try_parse_from(args).expect("External subcommand should parse");
    if let Some(Commands::Unknown(args)) = cli.command {
        assert_eq!(args, vec!["deploy", "--now"]);
    } else {
        panic!("Expected Unknown command for unrecognized name");
    }
}

#[test]
fn test_global_verbose_flag() {
    let args = vec!["whoamictl", "-vv", "build"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_global_config_flag() {
    let args = vec!["whoamictl", "--config", "/tmp/settings.json", "apply"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/settings.json"))
    );
}
