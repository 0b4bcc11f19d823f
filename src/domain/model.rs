use crate::utils::error::TicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One parsed line of the ticket file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Ticket {
    pub id: String,
    pub name: String,
    pub email: String,
    pub destination: String,
    pub time: String,
    pub flight: String,
}

impl Ticket {
    pub const FIELD_COUNT: usize = 6;

    /// Builds a ticket from the six raw columns, trimming only the destination.
    pub fn from_fields(fields: [&str; Self::FIELD_COUNT]) -> Self {
        let [id, name, email, destination, time, flight] = fields;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            destination: destination.trim().to_string(),
            time: time.to_string(),
            flight: flight.to_string(),
        }
    }
}

/// Time-of-day bucket. Boundaries are minutes since midnight:
/// Dawn `[0, 360]`, Morning `(360, 720]`, Afternoon `(720, 1140]`, Night `(1140, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    Dawn,
    Morning,
    Afternoon,
    #[default]
    Night,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Dawn,
        Period::Morning,
        Period::Afternoon,
        Period::Night,
    ];

    pub fn from_minute_of_day(minutes: u32) -> Self {
        match minutes {
            0..=360 => Period::Dawn,
            361..=720 => Period::Morning,
            721..=1140 => Period::Afternoon,
            _ => Period::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Dawn => "Dawn",
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Night => "Night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.label() == s)
            .ok_or_else(|| TicketError::UnknownPeriod {
                value: s.to_string(),
            })
    }
}

/// Final numbers of one pass, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub destination: String,
    pub period: Period,
    pub total_tickets: usize,
    pub destination_tickets: usize,
    pub period_tickets: usize,
    pub destination_percentage: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total tickets for {}: {}",
            self.destination, self.destination_tickets
        )?;
        writeln!(
            f,
            "Total tickets in period {}: {}",
            self.period, self.period_tickets
        )?;
        write!(
            f,
            "Percentage of tickets for {}: {:.2}%",
            self.destination, self.destination_percentage
        )
    }
}
