use crate::core::unsupported::{DEFAULT_NETWORK, UNSUPPORTED_SERVICE_KEYS};
use crate::domain::compose::{ComposeProject, RawServiceConfig};
use crate::domain::ports::ComposeSource;
use crate::utils::error::{NormalizeError, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// Compose file on disk, parsed with `serde_yaml`.
#[derive(Debug, Clone)]
pub struct ComposeFile {
    path: PathBuf,
    name: String,
}

impl ComposeFile {
    /// An empty path falls back to `docker-compose.yml`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_COMPOSE_FILE)
        } else {
            path.to_path_buf()
        };
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Parse compose YAML. Both the v1 layout (services at the top level)
    /// and the v2 layout (`services:` with `networks:`/`volumes:`) work.
    pub fn parse_str(source_name: &str, content: &str) -> Result<ComposeProject> {
        let fail = |message: String| NormalizeError::CollaboratorFailure {
            source_name: source_name.to_string(),
            message,
        };

        let document: Value = serde_yaml::from_str(content).map_err(|e| fail(e.to_string()))?;
        let root = match document {
            Value::Mapping(root) => root,
            Value::Null => Mapping::new(),
            _ => return Err(fail("top level must be a mapping".to_string())),
        };

        let mut project = ComposeProject::new();

        let services = if let Some(services) = root.get("services").cloned() {
            project.network_configs = section_names(root.get("networks"));
            project.volume_configs = section_names(root.get("volumes"));
            match services {
                Value::Mapping(services) => services,
                Value::Null => Mapping::new(),
                _ => return Err(fail("`services` must be a mapping".to_string())),
            }
        } else {
            // v1：最上層就是各個服務
            root.into_iter()
                .filter(|(key, _)| key.as_str() != Some("version"))
                .collect()
        };

        for (key, value) in services {
            let name = key
                .as_str()
                .ok_or_else(|| fail(format!("service name {:?} is not a string", key)))?
                .to_string();
            let config = parse_service(&value)
                .map_err(|e| fail(format!("service {:?}: {}", name, e)))?;
            project.services.push((name, config));
        }

        Ok(project)
    }
}

impl Default for ComposeFile {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSE_FILE)
    }
}

impl ComposeSource for ComposeFile {
    fn load(&self) -> Result<ComposeProject> {
        tracing::debug!("Reading compose file {}", self.name);
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            NormalizeError::CollaboratorFailure {
                source_name: self.name.clone(),
                message: e.to_string(),
            }
        })?;
        Self::parse_str(&self.name, &content)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceDocument {
    image: Option<String>,
    container_name: Option<String>,
    entrypoint: Option<CommandLine>,
    command: Option<CommandLine>,
    working_dir: Option<String>,
    environment: Option<ListOrMap>,
    ports: Vec<Scalar>,
    volumes: Vec<String>,
    volumes_from: Vec<String>,
    labels: Option<ListOrMap>,
    networks: Option<Networks>,
    cpuset: Option<String>,
    cpu_shares: Option<i64>,
    cpu_quota: Option<i64>,
    cap_add: Vec<String>,
    cap_drop: Vec<String>,
    expose: Vec<Scalar>,
    privileged: bool,
    restart: Option<String>,
    user: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommandLine {
    Shell(String),
    Exec(Vec<String>),
}

impl CommandLine {
    /// Shell form is split the way a POSIX shell would, quotes included.
    fn into_tokens(self) -> std::result::Result<Vec<String>, String> {
        match self {
            CommandLine::Shell(line) => {
                shell_words::split(&line).map_err(|e| format!("{} in {:?}", e, line))
            }
            CommandLine::Exec(tokens) => Ok(tokens),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListOrMap {
    List(Vec<String>),
    Map(Mapping),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Networks {
    List(Vec<String>),
    Map(Mapping),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn parse_service(value: &Value) -> std::result::Result<RawServiceConfig, String> {
    let unsupported_keys = match value {
        Value::Mapping(map) => map
            .keys()
            .filter_map(Value::as_str)
            .filter(|k| UNSUPPORTED_SERVICE_KEYS.contains(k))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let doc: ServiceDocument =
        serde_yaml::from_value(value.clone()).map_err(|e| e.to_string())?;

    Ok(RawServiceConfig {
        image: doc.image.unwrap_or_default(),
        container_name: doc.container_name,
        entrypoint: command_tokens(doc.entrypoint)?,
        command: command_tokens(doc.command)?,
        working_dir: doc.working_dir,
        environment: environment_tokens(doc.environment)?,
        ports: doc.ports.iter().map(Scalar::to_string).collect(),
        volumes: doc.volumes,
        volumes_from: doc.volumes_from,
        labels: label_map(doc.labels)?,
        networks: network_names(doc.networks),
        cpuset: doc.cpuset.unwrap_or_default(),
        cpu_shares: doc.cpu_shares.unwrap_or_default(),
        cpu_quota: doc.cpu_quota.unwrap_or_default(),
        cap_add: doc.cap_add,
        cap_drop: doc.cap_drop,
        expose: doc.expose.iter().map(Scalar::to_string).collect(),
        privileged: doc.privileged,
        restart: doc.restart.unwrap_or_default(),
        user: doc.user.map(|u| u.to_string()).unwrap_or_default(),
        unsupported_keys,
    })
}

fn command_tokens(line: Option<CommandLine>) -> std::result::Result<Vec<String>, String> {
    line.map(CommandLine::into_tokens)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Entries of a map form in file order; null values stay `None`.
fn map_entries(map: Mapping) -> std::result::Result<Vec<(String, Option<Scalar>)>, String> {
    map.into_iter()
        .map(|(key, value)| -> std::result::Result<(String, Option<Scalar>), String> {
            let key = key
                .as_str()
                .ok_or_else(|| format!("key {:?} is not a string", key))?
                .to_string();
            let value: Option<Scalar> =
                serde_yaml::from_value(value).map_err(|e| format!("{}: {}", key, e))?;
            Ok((key, value))
        })
        .collect()
}

/// Map form becomes `KEY=value`, or a bare `KEY` when the value is null.
fn environment_tokens(
    environment: Option<ListOrMap>,
) -> std::result::Result<Vec<String>, String> {
    match environment {
        None => Ok(Vec::new()),
        Some(ListOrMap::List(tokens)) => Ok(tokens),
        Some(ListOrMap::Map(map)) => Ok(map_entries(map)?
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{}={}", key, value),
                None => key,
            })
            .collect()),
    }
}

fn label_map(
    labels: Option<ListOrMap>,
) -> std::result::Result<BTreeMap<String, String>, String> {
    match labels {
        None => Ok(BTreeMap::new()),
        Some(ListOrMap::List(entries)) => Ok(entries
            .into_iter()
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (entry, String::new()),
            })
            .collect()),
        Some(ListOrMap::Map(map)) => Ok(map_entries(map)?
            .into_iter()
            .map(|(key, value)| (key, value.map(|v| v.to_string()).unwrap_or_default()))
            .collect()),
    }
}

fn network_names(networks: Option<Networks>) -> Vec<String> {
    let names: Vec<String> = match networks {
        None => Vec::new(),
        Some(Networks::List(names)) => names,
        Some(Networks::Map(map)) => map
            .keys()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    };

    if names.is_empty() {
        vec![DEFAULT_NETWORK.to_string()]
    } else {
        names
    }
}

fn section_names(section: Option<&Value>) -> Vec<String> {
    match section {
        Some(Value::Mapping(map)) => map
            .keys()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
