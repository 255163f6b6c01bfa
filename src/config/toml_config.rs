use crate::config::{OutputFormat, Settings};
use crate::utils::error::{NormalizeError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NormalizeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NormalizeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn input_file(&self) -> Option<&str> {
        self.input.as_ref().map(|i| i.file.as_str())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Settings taken from the file alone, with defaults for the rest.
    pub fn to_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(file) = self.input_file() {
            settings.file = file.to_string();
        }
        if let Some(format) = self.output_format() {
            settings.output_format = format.parse()?;
        }
        settings.output_path = self.output_path().map(str::to_string);
        settings.verbose = self.verbose();
        settings.json_logs = self.json_logs();
        Ok(settings)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = self.input_file() {
            validate_path("input.file", file)?;
        }
        if let Some(format) = self.output_format() {
            format.parse::<OutputFormat>()?;
        }
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}
