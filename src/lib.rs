pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ComposeFile;
pub use config::{OutputFormat, Settings};
pub use crate::core::labels::LabelRegistry;
pub use crate::core::normalizer::{Normalized, Normalizer};
pub use domain::compose::{ComposeProject, RawServiceConfig};
pub use domain::model::{EnvVar, PortMapping, ProjectRecord, Protocol, ServiceRecord, ServiceType};
pub use domain::ports::ComposeSource;
pub use utils::error::{NormalizeError, Result};
