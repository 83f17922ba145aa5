// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! kubectl invocation planning
//!
//! Every invocation is scoped to the configured namespace. `apply` and
//! `delete` consume the same manifest directory.

use crate::config::Settings;
use crate::runner::ToolInvocation;

/// `kubectl rollout restart deployment/<deployment> -n <namespace>`
pub fn rollout(settings: &Settings) -> ToolInvocation {
    let target = format!("deployment/{}", settings.cluster.deployment);
    ToolInvocation::new(
        "kubectl",
        &[
            "rollout",
            "restart",
            &target,
            "-n",
            &settings.cluster.namespace,
        ],
    )
}

/// `kubectl apply -n <namespace> -f <manifest-dir>`
pub fn apply(settings: &Settings) -> ToolInvocation {
    ToolInvocation::new(
        "kubectl",
        &[
            "apply",
            "-n",
            &settings.cluster.namespace,
            "-f",
            &settings.cluster.manifest_dir,
        ],
    )
}

/// `kubectl delete -n <namespace> -f <manifest-dir>`
pub fn delete(settings: &Settings) -> ToolInvocation {
    ToolInvocation::new(
        "kubectl",
        &[
            "delete",
            "-n",
            &settings.cluster.namespace,
            "-f",
            &settings.cluster.manifest_dir,
        ],
    )
}
