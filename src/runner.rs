// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! External tool execution
//!
//! A command is first planned as a [`ToolInvocation`] (pure data, no side
//! effects), then executed here. The child inherits stdio so docker, kubectl
//! and the development server stream their own output; the runner only maps
//! exit statuses back into [`DeployError`].

use tokio::process::Command;

use crate::error::{DeployError, Result};

/// One planned external-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Program to execute (resolved through PATH)
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Extra environment variables for the child
    pub env: Vec<(String, String)>,
}

impl ToolInvocation {
    /// Plan an invocation of `program` with the given arguments.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable to the child's environment.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Rendered command line, for logs and step banners.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Run a single invocation to completion, blocking until the child exits.
///
/// Stdio is inherited; the child's output is the operator-facing stream. A
/// non-zero exit becomes `CommandFailed` carrying the child's own code, and a
/// signal-terminated child is reported as code -1.
pub async fn run(invocation: &ToolInvocation) -> Result<()> {
    tracing::debug!(
        target: "whoamictl.runner",
        "spawning: {}",
        invocation.command_line()
    );

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);
    for (key, value) in &invocation.env {
        cmd.env(key, value);
    }

    let status = cmd.status().await.map_err(|e| DeployError::Spawn {
        program: invocation.program.clone(),
        source: e,
    })?;

    let code = status.code().unwrap_or(-1);
    if code == 0 {
        Ok(())
    } else {
        Err(DeployError::CommandFailed {
            program: invocation.program.clone(),
            code,
        })
    }
}

/// Run invocations strictly in order, stopping at the first failure.
///
/// Later steps are never spawned once an earlier one fails; nothing already
/// done is undone.
pub async fn run_sequence(invocations: &[ToolInvocation]) -> Result<()> {
    for invocation in invocations {
        run(invocation).await?;
    }
    Ok(())
}
