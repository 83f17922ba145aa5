// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! whoamictl - build, ship, and run the whoami homelab service.
//!
//! A single-binary dispatcher over `docker`, `kubectl` and the Flask
//! development server:
//! - `cli`: argument parsing and the fixed command set
//! - `commands`: command -> invocation planning and dispatch
//! - `runner`: blocking external-process execution with exit-code mapping
//! - `config`: the fixed deploy values (registry, image, namespace, ports)
//!
//! Each invocation is stateless: a command plans its external-tool argv from
//! settings alone, runs it in the foreground, and propagates the exit code.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod runner;

pub use error::{DeployError, Result};
