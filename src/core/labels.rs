use crate::domain::model::{ServiceRecord, ServiceType};
use std::collections::BTreeMap;
use thiserror::Error;

pub const SERVICE_TYPE_LABEL: &str = "kompose.service.type";
pub const SERVICE_TYPE_VALUES: &str = "NodePort, ClusterIP or LoadBalancer";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value {value:?} for label {label:?}, supported values are '{accepted}'")]
pub struct PolicyError {
    pub label: String,
    pub value: String,
    pub accepted: String,
}

/// A handler receives the label value and adjusts the record being built.
pub type LabelHandler = fn(&str, &mut ServiceRecord) -> Result<(), PolicyError>;

/// Labels that change how a service is converted, keyed by label name.
#[derive(Clone)]
pub struct LabelRegistry {
    handlers: BTreeMap<String, LabelHandler>,
}

impl LabelRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, label: impl Into<String>, handler: LabelHandler) -> &mut Self {
        self.handlers.insert(label.into(), handler);
        self
    }

    /// Apply every registered handler whose label is present, then copy all
    /// labels (policy ones included) into the annotations.
    pub fn apply(
        &self,
        labels: &BTreeMap<String, String>,
        record: &mut ServiceRecord,
    ) -> Result<(), PolicyError> {
        for (key, value) in labels {
            if let Some(handler) = self.handlers.get(key) {
                tracing::debug!("Applying label {}={:?}", key, value);
                handler(value, record)?;
            }
        }

        record.annotations = labels.clone();
        Ok(())
    }
}

impl std::fmt::Debug for LabelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl Default for LabelRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(SERVICE_TYPE_LABEL, apply_service_type);
        registry
    }
}

pub fn resolve_service_type(value: &str) -> Result<ServiceType, PolicyError> {
    match value.to_lowercase().as_str() {
        "" | "clusterip" => Ok(ServiceType::ClusterIp),
        "nodeport" => Ok(ServiceType::NodePort),
        "loadbalancer" => Ok(ServiceType::LoadBalancer),
        _ => Err(PolicyError {
            label: SERVICE_TYPE_LABEL.to_string(),
            value: value.to_string(),
            accepted: SERVICE_TYPE_VALUES.to_string(),
        }),
    }
}

fn apply_service_type(value: &str, record: &mut ServiceRecord) -> Result<(), PolicyError> {
    record.service_type = resolve_service_type(value)?;
    Ok(())
}
