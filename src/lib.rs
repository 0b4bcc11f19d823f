pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::TallyConfig;
pub use crate::core::{
    counter::DestinationCounter, loader::TicketLoader, stats::destination_percentage,
};
pub use crate::domain::model::{Period, Summary, Ticket};
pub use crate::domain::ports::TicketProcessor;
pub use crate::utils::error::{Result, TicketError};
