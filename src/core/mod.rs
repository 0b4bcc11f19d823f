pub mod counter;
pub mod loader;
pub mod stats;

pub use crate::domain::model::{Period, Summary, Ticket};
pub use crate::domain::ports::TicketProcessor;
pub use crate::utils::error::Result;
