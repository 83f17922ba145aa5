// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Docker invocation planning
//!
//! Build, push, and foreground-run of the service image. Planning is pure;
//! nothing here touches the docker daemon.

use std::path::Path;

use crate::config::Settings;
use crate::runner::ToolInvocation;

/// `docker build -t <registry>/<name>:<tag> .`
///
/// The build context is the working directory the dispatcher was invoked in.
pub fn build(settings: &Settings, working_dir: &Path) -> ToolInvocation {
    let image_ref = settings.image_ref_for(working_dir);
    ToolInvocation::new("docker", &["build", "-t", &image_ref, "."])
}

/// `docker push <registry>/<name>:<tag>`
pub fn push(settings: &Settings, working_dir: &Path) -> ToolInvocation {
    let image_ref = settings.image_ref_for(working_dir);
    ToolInvocation::new("docker", &["push", &image_ref])
}

/// `docker run --rm --network <network> -p <host>:<container> <image-ref>`
///
/// Foreground container on the homelab network; runs until the operator
/// interrupts it or the container exits.
pub fn run_homelab(settings: &Settings, working_dir: &Path) -> ToolInvocation {
    let image_ref = settings.image_ref_for(working_dir);
    let port_mapping = format!(
        "{}:{}",
        settings.homelab.host_port, settings.homelab.container_port
    );
    ToolInvocation::new(
        "docker",
        &[
            "run",
            "--rm",
            "--network",
            &settings.homelab.network,
            "-p",
            &port_mapping,
            &image_ref,
        ],
    )
}
