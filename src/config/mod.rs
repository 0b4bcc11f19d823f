#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Period;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESTINATION: &str = "Brazil";
pub const DEFAULT_TICKETS_FILE: &str = "tickets.csv";

/// What a [`DestinationCounter`](crate::core::counter::DestinationCounter) looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    pub destination: String,
    #[serde(default)]
    pub period: Period,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            period: Period::default(),
        }
    }
}

impl Validate for TallyConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tally.destination", &self.destination)
    }
}
