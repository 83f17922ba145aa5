// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for whoamictl
//!
//! Handles loading, saving, and managing the fixed deploy values.

pub mod settings;

pub use settings::*;
