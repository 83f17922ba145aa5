// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for whoamictl
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for whoamictl operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// An external tool exited with a non-zero status
    #[error("`{program}` exited with code {code}")]
    CommandFailed { program: String, code: i32 },

    /// An external tool could not be launched at all
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid invocation (unrecognized command)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeployError {
    /// Process exit status for this failure. Child exit codes are propagated
    /// verbatim; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::CommandFailed { code, .. } if (1..=255).contains(code) => *code,
            _ => 1,
        }
    }
}

/// Result type alias for whoamictl operations
pub type Result<T> = std::result::Result<T, DeployError>;
