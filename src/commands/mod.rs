// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command dispatch
//!
//! Maps each recognized command to its fixed external-tool invocation(s) and
//! runs them in order. Planning (`plan`) is pure so the argv mapping can be
//! tested without docker or kubectl installed; execution stops at the first
//! failing step and nothing already done is undone.

use std::io;
use std::path::Path;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::Commands;
use crate::config::Settings;
use crate::error::{DeployError, Result};
use crate::runner::{self, ToolInvocation};

pub mod docker;
pub mod kube;
pub mod local;

/// Plan the invocation sequence for a command. Every command maps to exactly
/// one invocation except `all`, which is the ordered build/push/rollout
/// sequence.
pub fn plan(
    command: &Commands,
    settings: &Settings,
    working_dir: &Path,
) -> Result<Vec<ToolInvocation>> {
    let invocations = match command {
        Commands::Build => vec![docker::build(settings, working_dir)],
        Commands::Push => vec![docker::push(settings, working_dir)],
        Commands::Rollout => vec![kube::rollout(settings)],
        Commands::All => vec![
            docker::build(settings, working_dir),
            docker::push(settings, working_dir),
            kube::rollout(settings),
        ],
        Commands::RunHomelab => vec![docker::run_homelab(settings, working_dir)],
        Commands::RunLocal => vec![local::dev_server(settings)],
        Commands::Apply => vec![kube::apply(settings)],
        Commands::Delete => vec![kube::delete(settings)],
        Commands::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or("");
            return Err(DeployError::InvalidInput(format!(
                "Unknown command '{}'",
                name
            )));
        }
    };
    Ok(invocations)
}

/// Plan and run a command from the current working directory.
pub async fn execute(command: &Commands, settings: &Settings) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let invocations = plan(command, settings, &working_dir)?;
    let total = invocations.len();
    tracing::debug!(
        target: "whoamictl.dispatch",
        "dispatching {:?}: {} step(s)",
        command,
        total
    );

    for (index, invocation) in invocations.iter().enumerate() {
        print_step(index + 1, total, invocation)?;
        runner::run(invocation).await?;
    }

    Ok(())
}

/// Print the step banner before handing the terminal to the child.
fn print_step(step: usize, total: usize, invocation: &ToolInvocation) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::DarkGrey))?;
    if total > 1 {
        print!("[{}/{}] ", step, total);
    }
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    println!("{}", invocation.command_line());
    stdout.execute(ResetColor)?;
    Ok(())
}
