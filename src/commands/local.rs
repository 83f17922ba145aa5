// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Local development server planning
//!
//! Runs the web app directly through the Flask development server, with
//! FLASK_APP pointing at the entry-point file. The server binds its default
//! port; no mapping is involved.

use crate::config::Settings;
use crate::runner::ToolInvocation;

/// `FLASK_APP=<entry-point> flask run`
pub fn dev_server(settings: &Settings) -> ToolInvocation {
    ToolInvocation::new("flask", &["run"]).with_env("FLASK_APP", &settings.local.flask_app)
}
