use anyhow::Result;
use compose_normalizer::adapters::output::render_project;
use compose_normalizer::core::unsupported::UnsupportedFeature;
use compose_normalizer::{
    ComposeFile, NormalizeError, Normalizer, OutputFormat, Protocol, ServiceType,
};
use tempfile::TempDir;

fn write_compose(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("docker-compose.yml");
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

/// 從檔案讀取到輸出 JSON 的完整流程
#[test]
fn test_end_to_end_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_compose(
        &temp_dir,
        r#"
version: "2"
services:
  web:
    image: nginx
    ports:
      - "8080:80"
    environment:
      - DEBUG=1
    labels:
      kompose.service.type: NodePort
  dns:
    image: coredns
    ports:
      - "53:53/UDP"
    environment:
      - UPSTREAM=udp://8.8.8.8:53
      - LEGACY:yes
      - TOKEN
    cap_add:
      - NET_BIND_SERVICE
"#,
    )?;

    let normalized = Normalizer::new().run(&ComposeFile::new(&path))?;
    let project = &normalized.project;
    assert_eq!(project.len(), 2);
    assert!(normalized.warnings.is_empty());

    let web = project.get("web").unwrap();
    assert_eq!(web.image, "nginx");
    assert_eq!(web.ports.len(), 1);
    assert_eq!(web.ports[0].host_port, Some(8080));
    assert_eq!(web.ports[0].container_port, 80);
    assert_eq!(web.ports[0].protocol, Protocol::Tcp);
    assert_eq!(web.environment[0].name, "DEBUG");
    assert_eq!(web.environment[0].value.as_deref(), Some("1"));
    assert_eq!(web.service_type, ServiceType::NodePort);
    assert_eq!(
        web.annotations.get("kompose.service.type").map(String::as_str),
        Some("NodePort")
    );

    let dns = project.get("dns").unwrap();
    assert_eq!(dns.ports[0].protocol, Protocol::Udp);
    assert_eq!(dns.environment[0].value.as_deref(), Some("udp://8.8.8.8:53"));
    assert_eq!(dns.environment[1].name, "LEGACY");
    assert_eq!(dns.environment[1].value.as_deref(), Some("yes"));
    assert_eq!(dns.environment[2].value, None);
    assert_eq!(dns.cap_add, vec!["NET_BIND_SERVICE"]);

    let json = render_project(project, OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["services"]["web"]["service_type"], "NodePort");
    assert_eq!(value["services"]["dns"]["service_type"], "ClusterIP");

    Ok(())
}

#[test]
fn test_unsupported_configuration_warns_once_per_category() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_compose(
        &temp_dir,
        r#"
version: "2"
services:
  web:
    image: nginx
    build: .
    networks:
      - front
  api:
    image: api
    build: ./api
    networks:
      - back
  db:
    image: postgres
networks:
  front: {}
  back: {}
volumes:
  data: {}
  logs: {}
"#,
    )?;

    let normalized = Normalizer::new().run(&ComposeFile::new(&path))?;
    assert_eq!(normalized.project.len(), 3);
    assert_eq!(
        normalized.warnings,
        vec![
            UnsupportedFeature::NetworkConfig,
            UnsupportedFeature::VolumeConfig,
            UnsupportedFeature::NetworksKey,
            UnsupportedFeature::ServiceKey("build".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_malformed_port_names_service_and_token() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_compose(
        &temp_dir,
        r#"
services:
  web:
    image: nginx
    ports:
      - "80:abc"
"#,
    )?;

    let err = Normalizer::new().run(&ComposeFile::new(&path)).unwrap_err();
    assert!(matches!(err, NormalizeError::MalformedPort { .. }));
    let message = err.user_friendly_message();
    assert!(message.contains("web"));
    assert!(message.contains("80:abc"));

    Ok(())
}

#[test]
fn test_unknown_service_type_label() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_compose(
        &temp_dir,
        r#"
services:
  web:
    image: nginx
    labels:
      - kompose.service.type=bogus
"#,
    )?;

    let err = Normalizer::new().run(&ComposeFile::new(&path)).unwrap_err();
    match &err {
        NormalizeError::UnrecognizedPolicyValue {
            service,
            value,
            accepted,
            ..
        } => {
            assert_eq!(service, "web");
            assert_eq!(value, "bogus");
            assert!(accepted.contains("ClusterIP"));
        }
        other => panic!("expected UnrecognizedPolicyValue, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_missing_compose_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.yml");

    let err = Normalizer::new().run(&ComposeFile::new(&path)).unwrap_err();
    assert!(matches!(err, NormalizeError::CollaboratorFailure { .. }));
    assert!(err.to_string().contains("missing.yml"));
}
