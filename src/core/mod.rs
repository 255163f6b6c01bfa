pub mod env;
pub mod labels;
pub mod normalizer;
pub mod ports;
pub mod unsupported;

pub use crate::domain::compose::{ComposeProject, RawServiceConfig};
pub use crate::domain::model::{
    EnvVar, PortMapping, ProjectRecord, Protocol, ServiceRecord, ServiceType,
};
pub use crate::domain::ports::ComposeSource;
pub use crate::utils::error::Result;
