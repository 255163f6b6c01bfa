use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("{service:?} failed to load ports from compose file: invalid {reason} {token:?}")]
    MalformedPort {
        service: String,
        token: String,
        reason: String,
    },

    #[error(
        "{service:?} has unknown value {value:?} for label {label:?}, supported values are '{accepted}'"
    )]
    UnrecognizedPolicyValue {
        service: String,
        label: String,
        value: String,
        accepted: String,
    },

    #[error("Failed to load compose file {source_name}: {message}")]
    CollaboratorFailure {
        source_name: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NormalizeError {
    /// 給使用者看的錯誤訊息，指出服務與出錯的輸入
    pub fn user_friendly_message(&self) -> String {
        match self {
            NormalizeError::MalformedPort { service, token, .. } => {
                format!("Service '{}' has an invalid port mapping '{}'", service, token)
            }
            NormalizeError::UnrecognizedPolicyValue {
                service,
                label,
                value,
                ..
            } => format!(
                "Service '{}' sets label '{}' to unsupported value '{}'",
                service, label, value
            ),
            NormalizeError::CollaboratorFailure { source_name, .. } => {
                format!("Could not read compose file '{}'", source_name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NormalizeError::MalformedPort { .. } => {
                "Use '<container>', '<host>:<container>' or '<host>:<container>/<tcp|udp>'"
                    .to_string()
            }
            NormalizeError::UnrecognizedPolicyValue { accepted, .. } => {
                format!("Use one of: {}", accepted)
            }
            NormalizeError::CollaboratorFailure { .. } => {
                "Check that the file exists and is valid compose YAML".to_string()
            }
            NormalizeError::IoError(_) => "Check file permissions and paths".to_string(),
            NormalizeError::SerializationError { .. } => {
                "Try a different --output-format".to_string()
            }
            NormalizeError::ConfigError { .. }
            | NormalizeError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
