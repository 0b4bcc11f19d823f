use crate::config::toml_config::{OutputFormat, TomlConfig};
use crate::config::{TallyConfig, DEFAULT_DESTINATION, DEFAULT_TICKETS_FILE};
use crate::domain::model::Period;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-stats")]
#[command(about = "Counts airline tickets by destination and time of day")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ticket file (id,name,email,destination,HH:MM,flight per line)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Destination to count, compared case-insensitively
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Period to count: Dawn, Morning, Afternoon or Night
    #[arg(short, long)]
    pub period: Option<Period>,

    /// TOML config file; flags given on the command line win over it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a greeting
    Greet {
        #[arg(short, long, default_value = "World")]
        name: String,
    },
}

/// Everything one pass needs once flags and config file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub file: String,
    pub tally: TallyConfig,
    pub format: OutputFormat,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<RunSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let file = self
            .file
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.source.path.clone()))
            .unwrap_or_else(|| DEFAULT_TICKETS_FILE.to_string());

        let destination = self
            .destination
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.tally.destination.clone()))
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        let period = self
            .period
            .or_else(|| file_config.as_ref().map(|c| c.tally.period))
            .unwrap_or_default();

        let format = self
            .format
            .or_else(|| file_config.as_ref().map(TomlConfig::output_format))
            .unwrap_or_default();

        Ok(RunSettings {
            file,
            tally: TallyConfig {
                destination,
                period,
            },
            format,
        })
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        self.tally.validate()
    }
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}! Welcome to ticket-stats!", name)
}
