use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical project: service name to normalized service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub services: BTreeMap<String, ServiceRecord>,
}

impl ProjectRecord {
    pub fn get(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.get(name)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub image: String,
    pub container_name: Option<String>,
    /// Fed by the source `entrypoint`.
    pub command: Vec<String>,
    /// Fed by the source `command`.
    pub args: Vec<String>,
    pub working_dir: Option<String>,
    pub environment: Vec<EnvVar>,
    pub ports: Vec<PortMapping>,
    pub volumes: Vec<String>,
    pub volumes_from: Vec<String>,
    pub annotations: BTreeMap<String, String>,
    pub service_type: ServiceType,
    pub cpu_set: String,
    pub cpu_shares: i64,
    pub cpu_quota: i64,
    pub cap_add: Vec<String>,
    pub cap_drop: Vec<String>,
    pub expose: Vec<String>,
    pub privileged: bool,
    pub restart: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    /// `None` means the value is inherited from the runtime environment.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub container_port: u16,
    pub host_port: Option<u16>,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}

/// How the service endpoint is reachable downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "ClusterIP")]
    ClusterIp,
    NodePort,
    LoadBalancer,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::ClusterIp => "ClusterIP",
            ServiceType::NodePort => "NodePort",
            ServiceType::LoadBalancer => "LoadBalancer",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
