// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for whoamictl
//!
//! Handles loading and saving settings from ~/.whoamictl/settings.json.
//! Every deploy value has a fixed default matching the shipped homelab
//! deployment; the settings file only exists to override them.

use serde::{Deserialize, Serialize};
use std::path::Path;

mod io;
mod validation;

/// Main settings structure, stored in ~/.whoamictl/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Container registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Image naming configuration
    #[serde(default)]
    pub image: ImageConfig,

    /// Cluster targeting configuration
    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Homelab container run configuration
    #[serde(default)]
    pub homelab: HomelabConfig,

    /// Local development server configuration
    #[serde(default)]
    pub local: LocalConfig,
}

/// Container registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry hostname the image is pushed to
    #[serde(default = "default_registry_host")]
    pub host: String,
}

/// Image naming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Explicit image name; when unset the name is derived from the
    /// working directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Image tag
    #[serde(default = "default_image_tag")]
    pub tag: String,
}

/// Cluster targeting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Namespace every kubectl invocation is scoped to
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Deployment restarted by `rollout`
    #[serde(default = "default_deployment")]
    pub deployment: String,

    /// Manifest directory consumed by `apply` and `delete`
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: String,
}

/// Homelab container run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomelabConfig {
    /// Named container network the container joins
    #[serde(default = "default_network")]
    pub network: String,

    /// Host port mapped onto the container
    #[serde(default = "default_host_port")]
    pub host_port: u16,

    /// Container port the service listens on
    #[serde(default = "default_container_port")]
    pub container_port: u16,
}

/// Local development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Entry-point file exported as FLASK_APP for the development server
    #[serde(default = "default_flask_app")]
    pub flask_app: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: default_registry_host(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: None,
            tag: default_image_tag(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            deployment: default_deployment(),
            manifest_dir: default_manifest_dir(),
        }
    }
}

impl Default for HomelabConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            host_port: default_host_port(),
            container_port: default_container_port(),
        }
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            flask_app: default_flask_app(),
        }
    }
}

fn default_registry_host() -> String {
    "registry.local".to_string()
}

fn default_image_tag() -> String {
    "latest".to_string()
}

fn default_namespace() -> String {
    "web".to_string()
}

fn default_deployment() -> String {
    "whoami".to_string()
}

fn default_manifest_dir() -> String {
    "k8s".to_string()
}

fn default_network() -> String {
    "proxynet".to_string()
}

fn default_host_port() -> u16 {
    5001
}

fn default_container_port() -> u16 {
    5000
}

fn default_flask_app() -> String {
    "app.py".to_string()
}

impl Settings {
    /// Image name for a build rooted at `working_dir`: the explicit setting
    /// wins, otherwise the directory's own name. Falls back to the deployment
    /// name when the directory name is unusable (e.g. filesystem root).
    pub fn image_name_for(&self, working_dir: &Path) -> String {
        if let Some(ref name) = self.image.name {
            return name.clone();
        }
        working_dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .unwrap_or_else(|| self.cluster.deployment.clone())
    }

    /// Fully qualified image reference: `<registry>/<name>:<tag>`.
    pub fn image_ref_for(&self, working_dir: &Path) -> String {
        format!(
            "{}/{}:{}",
            self.registry.host,
            self.image_name_for(working_dir),
            self.image.tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_match_deployment() {
        let settings = Settings::default();
        assert_eq!(settings.registry.host, "registry.local");
        assert_eq!(settings.image.tag, "latest");
        assert!(settings.image.name.is_none());
        assert_eq!(settings.cluster.namespace, "web");
        assert_eq!(settings.cluster.deployment, "whoami");
        assert_eq!(settings.cluster.manifest_dir, "k8s");
        assert_eq!(settings.homelab.network, "proxynet");
        assert_eq!(settings.homelab.host_port, 5001);
        assert_eq!(settings.homelab.container_port, 5000);
        assert_eq!(settings.local.flask_app, "app.py");
    }

    #[test]
    fn test_image_name_derived_from_directory() {
        let settings = Settings::default();
        let dir = PathBuf::from("/home/operator/whoami");
        assert_eq!(settings.image_name_for(&dir), "whoami");
    }

    #[test]
    fn test_image_name_explicit_override_wins() {
        let mut settings = Settings::default();
        settings.image.name = Some("whoami-web".to_string());
        let dir = PathBuf::from("/home/operator/scratch");
        assert_eq!(settings.image_name_for(&dir), "whoami-web");
    }

    #[test]
    fn test_image_name_falls_back_to_deployment() {
        let settings = Settings::default();
        assert_eq!(settings.image_name_for(Path::new("/")), "whoami");
    }

    #[test]
    fn test_image_ref_layout() {
        let settings = Settings::default();
        let dir = PathBuf::from("/srv/whoami");
        assert_eq!(
            settings.image_ref_for(&dir),
            "registry.local/whoami:latest"
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"registry": {"host": "registry.example.net"}}"#).unwrap();
        assert_eq!(settings.registry.host, "registry.example.net");
        assert_eq!(settings.cluster.namespace, "web");
        assert_eq!(settings.homelab.host_port, 5001);
    }
}
