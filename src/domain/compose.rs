use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-service configuration as produced by the compose parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawServiceConfig {
    pub image: String,
    pub container_name: Option<String>,
    pub entrypoint: Vec<String>,
    pub command: Vec<String>,
    pub working_dir: Option<String>,
    pub environment: Vec<String>,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    pub volumes_from: Vec<String>,
    pub labels: BTreeMap<String, String>,
    /// Network attachments. The parser always attaches `default` when none is declared.
    pub networks: Vec<String>,
    pub cpuset: String,
    pub cpu_shares: i64,
    pub cpu_quota: i64,
    pub cap_add: Vec<String>,
    pub cap_drop: Vec<String>,
    pub expose: Vec<String>,
    pub privileged: bool,
    pub restart: String,
    pub user: String,
    /// Keys set on the service that have no downstream representation.
    pub unsupported_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeProject {
    /// Services in the order the parser yielded them.
    pub services: Vec<(String, RawServiceConfig)>,
    pub network_configs: Vec<String>,
    pub volume_configs: Vec<String>,
}

impl ComposeProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, name: impl Into<String>, config: RawServiceConfig) -> Self {
        self.services.push((name.into(), config));
        self
    }

    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|(name, _)| name.as_str())
    }
}
