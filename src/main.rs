// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! whoamictl - build, ship, and run the whoami homelab service
//!
//! Entry point for the whoamictl CLI application.

use std::io;

use clap::{CommandFactory, Parser};
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use whoamictl::cli::{Cli, Commands};
use whoamictl::commands;
use whoamictl::config::Settings;
use whoamictl::error::DeployError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments; clap handles help/-h/--help and exits zero itself.
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` shows the planned command lines without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        for directive in ["whoamictl.runner=debug", "whoamictl.dispatch=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        None => {
            // Bare invocation is a usage request, not an error.
            let _ = Cli::command().print_help();
            std::process::exit(0);
        }
        Some(Commands::Unknown(ref args)) => {
            let name = args.first().map(String::as_str).unwrap_or("");
            eprintln!("Unknown command '{}'", name);
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
        Some(ref command) => {
            // Settings (the fixed deploy values) are only needed once a real
            // command is dispatched; the usage paths above touch nothing.
            let settings = match load_settings(&cli) {
                Ok(settings) => settings,
                Err(e) => exit_with_error(e),
            };
            if let Err(e) = commands::execute(command, &settings).await {
                exit_with_error(e);
            }
        }
    }
}

fn load_settings(cli: &Cli) -> whoamictl::Result<Settings> {
    match cli.config {
        Some(ref path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

/// Print the failure and terminate with its exit code. A failed external
/// tool has already written its own error output; this only adds the
/// one-line summary and the propagated code.
fn exit_with_error(e: DeployError) -> ! {
    let mut stdout = io::stdout();
    let _ = stdout.execute(SetForegroundColor(Color::Red));
    eprintln!("✗ {}", e);
    let _ = stdout.execute(ResetColor);
    std::process::exit(e.exit_code());
}
