use crate::domain::compose::{ComposeProject, RawServiceConfig};
use std::collections::HashSet;

/// Attachment the parser adds to every service, declared or not.
pub const DEFAULT_NETWORK: &str = "default";

/// Service keys that have no counterpart in the canonical record.
pub const UNSUPPORTED_SERVICE_KEYS: &[&str] = &[
    "build",
    "cgroup_parent",
    "devices",
    "depends_on",
    "dns",
    "dns_search",
    "domainname",
    "env_file",
    "extends",
    "external_links",
    "extra_hosts",
    "hostname",
    "ipc",
    "logging",
    "mac_address",
    "mem_limit",
    "memswap_limit",
    "network_mode",
    "pid",
    "security_opt",
    "shm_size",
    "stop_signal",
    "volume_driver",
    "uts",
    "read_only",
    "stdin_open",
    "tty",
    "ulimits",
    "links",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnsupportedFeature {
    NetworkConfig,
    VolumeConfig,
    NetworksKey,
    ServiceKey(String),
}

impl UnsupportedFeature {
    pub fn message(&self) -> String {
        match self {
            UnsupportedFeature::NetworkConfig => {
                "Unsupported network configuration of compose v2 - ignoring".to_string()
            }
            UnsupportedFeature::VolumeConfig => {
                "Unsupported volume configuration of compose v2 - ignoring".to_string()
            }
            UnsupportedFeature::NetworksKey => "Unsupported key networks - ignoring".to_string(),
            UnsupportedFeature::ServiceKey(key) => format!("Unsupported key {} - ignoring", key),
        }
    }
}

/// Warnings already emitted during one normalization pass.
#[derive(Debug, Default)]
pub struct WarningLedger {
    seen: HashSet<UnsupportedFeature>,
    emitted: Vec<UnsupportedFeature>,
}

impl WarningLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the warning unless this category was already reported. Returns
    /// whether it was logged.
    pub fn warn(&mut self, feature: UnsupportedFeature) -> bool {
        if self.seen.contains(&feature) {
            return false;
        }

        tracing::warn!("{}", feature.message());
        self.seen.insert(feature.clone());
        self.emitted.push(feature);
        true
    }

    pub fn into_warnings(self) -> Vec<UnsupportedFeature> {
        self.emitted
    }
}

pub fn check_project(project: &ComposeProject, ledger: &mut WarningLedger) {
    if !project.network_configs.is_empty() {
        ledger.warn(UnsupportedFeature::NetworkConfig);
    }
    if !project.volume_configs.is_empty() {
        ledger.warn(UnsupportedFeature::VolumeConfig);
    }
}

pub fn check_service(name: &str, config: &RawServiceConfig, ledger: &mut WarningLedger) {
    if config.networks.iter().any(|n| n != DEFAULT_NETWORK) {
        tracing::debug!("Service {} declares networks {:?}", name, config.networks);
        ledger.warn(UnsupportedFeature::NetworksKey);
    }

    for key in &config.unsupported_keys {
        ledger.warn(UnsupportedFeature::ServiceKey(key.clone()));
    }
}
