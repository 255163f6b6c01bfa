pub mod toml_config;

use crate::adapters::DEFAULT_COMPOSE_FILE;
use crate::utils::error::{NormalizeError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["json", "yaml"];
}

impl FromStr for OutputFormat {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(NormalizeError::InvalidConfigValueError {
                field: "output_format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", OutputFormat::NAMES.join(", ")),
            }),
        }
    }
}

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: String,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: DEFAULT_COMPOSE_FILE.to_string(),
            output_format: OutputFormat::Json,
            output_path: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        if let Some(path) = &self.output_path {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "compose-normalizer")]
#[command(about = "Normalize a compose file into a canonical project record")]
pub struct CliConfig {
    /// Compose file to read (default: docker-compose.yml)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: json or yaml
    #[arg(long)]
    pub output_format: Option<String>,

    /// Write the record to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Start from the TOML file when given, then let flags override it.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let config = toml_config::TomlConfig::from_file(path)?;
                config.validate()?;
                config.to_settings()?
            }
            None => Settings::default(),
        };

        if let Some(file) = &self.file {
            settings.file = file.clone();
        }
        if let Some(format) = &self.output_format {
            settings.output_format = format.parse()?;
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(output.clone());
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["compose-normalizer"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.file, "docker-compose.yml");
    }

    #[test]
    fn test_flags_override_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\nfile = \"from-toml.yml\"\n\n[output]\nformat = \"yaml\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "compose-normalizer",
            "--config",
            config_path.as_str(),
            "--file",
            "from-flag.yml",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.file, "from-flag.yml");
        assert_eq!(settings.output_format, OutputFormat::Yaml);
    }

    #[test]
    fn test_bad_output_format_flag() {
        let cli = CliConfig::parse_from(["compose-normalizer", "--output-format", "xml"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }
}
