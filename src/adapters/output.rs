use crate::config::OutputFormat;
use crate::domain::model::ProjectRecord;
use crate::utils::error::{NormalizeError, Result};
use std::fs;
use std::path::Path;

pub fn render_project(project: &ProjectRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(project).map_err(|e| {
            NormalizeError::SerializationError {
                message: e.to_string(),
            }
        }),
        OutputFormat::Yaml => {
            serde_yaml::to_string(project).map_err(|e| NormalizeError::SerializationError {
                message: e.to_string(),
            })
        }
    }
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PortMapping, Protocol, ServiceRecord, ServiceType};
    use tempfile::TempDir;

    fn sample() -> ProjectRecord {
        let mut project = ProjectRecord::default();
        project.services.insert(
            "web".to_string(),
            ServiceRecord {
                image: "nginx".to_string(),
                ports: vec![PortMapping {
                    container_port: 80,
                    host_port: None,
                    protocol: Protocol::Udp,
                }],
                service_type: ServiceType::LoadBalancer,
                ..Default::default()
            },
        );
        project
    }

    #[test]
    fn test_render_json_uses_canonical_names() {
        let json = render_project(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let web = &value["services"]["web"];
        assert_eq!(web["service_type"], "LoadBalancer");
        assert_eq!(web["ports"][0]["protocol"], "UDP");
        assert!(web["ports"][0]["host_port"].is_null());
    }

    #[test]
    fn test_render_yaml_reads_back() {
        let yaml = render_project(&sample(), OutputFormat::Yaml).unwrap();
        let project: ProjectRecord = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(project, sample());
    }

    #[test]
    fn test_write_output_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/project.json");

        write_output(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
