use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Cannot open ticket source '{path}': {source}")]
    SourceOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid record on line {line}: expected 6 fields, found {found}")]
    InvalidRecord { line: u64, found: usize },

    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    #[error("Unknown period '{value}' (expected Dawn, Morning, Afternoon or Night)")]
    UnknownPeriod { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TicketError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceOpen { .. } => ErrorCategory::Source,
            Self::CsvError(_) | Self::InvalidRecord { .. } | Self::InvalidTime { .. } => {
                ErrorCategory::Data
            }
            Self::UnknownPeriod { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SourceOpen { path, .. } => format!("Could not open ticket file '{}'", path),
            Self::InvalidRecord { line, found } => format!(
                "Ticket file is malformed on line {} ({} fields instead of 6)",
                line, found
            ),
            Self::InvalidTime { value, .. } => {
                format!("Ticket has an unreadable departure time '{}'", value)
            }
            Self::UnknownPeriod { value } => format!("'{}' is not a known period", value),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SourceOpen { .. } => "Check that the --file path exists and is readable",
            Self::CsvError(_) => "Make sure the ticket file is valid UTF-8 comma-separated text",
            Self::InvalidRecord { .. } => {
                "Every line needs id,name,email,destination,time,flight"
            }
            Self::InvalidTime { .. } => "Departure times must use the 24h HH:MM format",
            Self::UnknownPeriod { .. } => "Use one of: Dawn, Morning, Afternoon, Night",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and config file"
            }
            Self::IoError(_) => "Check that the config file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
