// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{DeployError, Result};

use super::Settings;

impl Settings {
    /// Check the loaded values before any command plans against them.
    /// Empty names and zero ports would only surface later as confusing
    /// docker/kubectl usage errors.
    pub fn validate(&self) -> Result<()> {
        let non_empty = [
            ("registry.host", &self.registry.host),
            ("image.tag", &self.image.tag),
            ("cluster.namespace", &self.cluster.namespace),
            ("cluster.deployment", &self.cluster.deployment),
            ("cluster.manifest_dir", &self.cluster.manifest_dir),
            ("homelab.network", &self.homelab.network),
            ("local.flask_app", &self.local.flask_app),
        ];
        for (key, value) in non_empty {
            if value.trim().is_empty() {
                return Err(DeployError::Config(format!("{} must not be empty", key)));
            }
        }

        if let Some(ref name) = self.image.name {
            if name.trim().is_empty() {
                return Err(DeployError::Config(
                    "image.name must not be empty when set".to_string(),
                ));
            }
        }

        if self.homelab.host_port == 0 || self.homelab.container_port == 0 {
            return Err(DeployError::Config(
                "homelab ports must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
