use crate::domain::model::Ticket;
use crate::utils::error::Result;

/// Consumer of a ticket stream. The loader calls both methods once per
/// ticket, `tally_total_and_destination` first, and stops at the first error.
pub trait TicketProcessor {
    fn tally_total_and_destination(&mut self, ticket: &Ticket) -> Result<()>;
    fn tally_period(&mut self, ticket: &Ticket) -> Result<()>;
}
