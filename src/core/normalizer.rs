use crate::core::env::parse_env;
use crate::core::labels::LabelRegistry;
use crate::core::ports::parse_ports;
use crate::core::unsupported::{check_project, check_service, UnsupportedFeature, WarningLedger};
use crate::core::ComposeSource;
use crate::domain::compose::{ComposeProject, RawServiceConfig};
use crate::domain::model::{ProjectRecord, ServiceRecord};
use crate::utils::error::{NormalizeError, Result};

/// Result of one pass together with the warnings it emitted.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub project: ProjectRecord,
    pub warnings: Vec<UnsupportedFeature>,
}

pub struct Normalizer {
    registry: LabelRegistry,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::with_registry(LabelRegistry::default())
    }

    pub fn with_registry(registry: LabelRegistry) -> Self {
        Self { registry }
    }

    /// Load from `source` and normalize. Parser failures surface as
    /// `CollaboratorFailure`.
    pub fn run<S: ComposeSource>(&self, source: &S) -> Result<Normalized> {
        tracing::info!("Loading compose project from {}", source.source_name());
        let project = source.load()?;
        tracing::info!("Loaded {} service(s)", project.services.len());

        self.normalize_with_report(&project)
    }

    pub fn normalize(&self, project: &ComposeProject) -> Result<ProjectRecord> {
        self.normalize_with_report(project).map(|n| n.project)
    }

    /// Services are visited in parser order. The first fatal error aborts
    /// the whole pass.
    pub fn normalize_with_report(&self, project: &ComposeProject) -> Result<Normalized> {
        let mut ledger = WarningLedger::new();
        let mut record = ProjectRecord::default();

        check_project(project, &mut ledger);

        for (name, config) in &project.services {
            check_service(name, config, &mut ledger);

            let service = self.normalize_service(name, config)?;
            if record.services.insert(name.clone(), service).is_some() {
                tracing::warn!("Duplicate service {} - keeping the last definition", name);
            }
        }

        Ok(Normalized {
            project: record,
            warnings: ledger.into_warnings(),
        })
    }

    fn normalize_service(&self, name: &str, config: &RawServiceConfig) -> Result<ServiceRecord> {
        tracing::debug!("Normalizing service {}", name);

        let ports = parse_ports(&config.ports).map_err(|e| NormalizeError::MalformedPort {
            service: name.to_string(),
            token: e.token,
            reason: e.part.to_string(),
        })?;

        let mut service = ServiceRecord {
            image: config.image.clone(),
            container_name: config.container_name.clone(),
            command: config.entrypoint.clone(),
            args: config.command.clone(),
            working_dir: config.working_dir.clone(),
            environment: parse_env(&config.environment),
            ports,
            volumes: config.volumes.clone(),
            volumes_from: config.volumes_from.clone(),
            cpu_set: config.cpuset.clone(),
            cpu_shares: config.cpu_shares,
            cpu_quota: config.cpu_quota,
            cap_add: config.cap_add.clone(),
            cap_drop: config.cap_drop.clone(),
            expose: config.expose.clone(),
            privileged: config.privileged,
            restart: config.restart.clone(),
            user: config.user.clone(),
            ..Default::default()
        };

        self.registry
            .apply(&config.labels, &mut service)
            .map_err(|e| NormalizeError::UnrecognizedPolicyValue {
                service: name.to_string(),
                label: e.label,
                value: e.value,
                accepted: e.accepted,
            })?;

        Ok(service)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
