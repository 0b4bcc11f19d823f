use crate::config::TallyConfig;
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub tally: TallyConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

const SOURCE_EXTENSIONS: [&str; 2] = ["csv", "txt"];

impl TomlConfig {
    /// Loads a config file, expanding `${VAR}` references first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().map(|o| o.format).unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", &self.source.path)?;
        validate_file_extension("source.path", &self.source.path, &SOURCE_EXTENSIONS)?;
        self.tally.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Period;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
path = "data/tickets.csv"

[tally]
destination = "Finland"
period = "Morning"

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.path, "data/tickets.csv");
        assert_eq!(config.tally.destination, "Finland");
        assert_eq!(config.tally.period, Period::Morning);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_period_defaults_and_output_is_optional() {
        let toml_content = r#"
[source]
path = "tickets.csv"

[tally]
destination = "Brazil"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tally.period, Period::Night);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_unknown_period_is_a_parse_error() {
        let toml_content = r#"
[source]
path = "tickets.csv"

[tally]
destination = "Brazil"
period = "Evening"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, TicketError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TICKET_STATS_TEST_DESTINATION", "Portugal");

        let toml_content = r#"
[source]
path = "tickets.csv"

[tally]
destination = "${TICKET_STATS_TEST_DESTINATION}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tally.destination, "Portugal");

        std::env::remove_var("TICKET_STATS_TEST_DESTINATION");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[source]
path = "tickets.json"

[tally]
destination = "Brazil"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
path = "tickets.csv"

[tally]
destination = "Japan"
period = "Dawn"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.tally.destination, "Japan");
        assert_eq!(config.tally.period, Period::Dawn);
    }
}
