use crate::config::TallyConfig;
use crate::core::stats::destination_percentage;
use crate::core::{Result, Summary, Ticket, TicketProcessor};
use crate::domain::model::Period;
use crate::utils::error::TicketError;
use chrono::{NaiveTime, Timelike};

const TIME_FORMAT: &str = "%H:%M";

/// Counts tickets for one destination and one period.
///
/// Counters only ever grow during a pass; build a new counter for a new pass.
#[derive(Debug, Clone)]
pub struct DestinationCounter {
    destination: String,
    period: Period,
    total: usize,
    destination_matches: usize,
    period_matches: usize,
}

impl DestinationCounter {
    pub fn new(config: TallyConfig) -> Self {
        Self {
            destination: config.destination,
            period: config.period,
            total: 0,
            destination_matches: 0,
            period_matches: 0,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn destination_matches(&self) -> usize {
        self.destination_matches
    }

    pub fn period_matches(&self) -> usize {
        self.period_matches
    }

    pub fn summary(&self) -> Summary {
        Summary {
            destination: self.destination.clone(),
            period: self.period,
            total_tickets: self.total,
            destination_tickets: self.destination_matches,
            period_tickets: self.period_matches,
            destination_percentage: destination_percentage(self.destination_matches, self.total),
        }
    }
}

/// Hour of one or two digits, minute of exactly two, nothing around them.
fn has_time_shape(value: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match value.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && all_digits(hour)
                && all_digits(minute)
        }
        None => false,
    }
}

/// Classifies an `HH:MM` departure time.
pub fn classify_time(value: &str) -> Result<Period> {
    if !has_time_shape(value) {
        return Err(TicketError::InvalidTime {
            value: value.to_string(),
            reason: "expected HH:MM".to_string(),
        });
    }

    let time = NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| {
        TicketError::InvalidTime {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(Period::from_minute_of_day(time.hour() * 60 + time.minute()))
}

/// Caseless comparison; final sigma folds onto sigma like the other Greek forms.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == 'ς' { 'σ' } else { c })
    }
    fold(a).eq(fold(b))
}

impl TicketProcessor for DestinationCounter {
    fn tally_total_and_destination(&mut self, ticket: &Ticket) -> Result<()> {
        self.total += 1;
        if eq_ignore_case(&ticket.destination, &self.destination) {
            self.destination_matches += 1;
        }
        Ok(())
    }

    fn tally_period(&mut self, ticket: &Ticket) -> Result<()> {
        let period = classify_time(&ticket.time)?;
        if period == self.period {
            self.period_matches += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(destination: &str, period: Period) -> DestinationCounter {
        DestinationCounter::new(TallyConfig {
            destination: destination.to_string(),
            period,
        })
    }

    fn ticket_to(destination: &str) -> Ticket {
        Ticket {
            destination: destination.to_string(),
            ..Default::default()
        }
    }

    fn ticket_at(time: &str) -> Ticket {
        Ticket {
            time: time.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matching_destination_counts() {
        let mut dc = counter("United States", Period::Night);
        dc.tally_total_and_destination(&ticket_to("United States")).unwrap();

        assert_eq!(dc.destination_matches(), 1);
        assert_eq!(dc.total(), 1);
    }

    #[test]
    fn test_other_destination_only_counts_total() {
        let mut dc = counter("Canada", Period::Night);
        dc.tally_total_and_destination(&ticket_to("United States")).unwrap();

        assert_eq!(dc.destination_matches(), 0);
        assert_eq!(dc.total(), 1);
    }

    #[test]
    fn test_destination_match_ignores_case() {
        let mut dc = counter("United States", Period::Night);
        dc.tally_total_and_destination(&ticket_to("united states")).unwrap();
        dc.tally_total_and_destination(&ticket_to("UNITED STATES")).unwrap();

        assert_eq!(dc.destination_matches(), 2);
    }

    #[test]
    fn test_destination_match_folds_greek_sigma() {
        let mut dc = counter("ΟΔΟΣ", Period::Night);
        dc.tally_total_and_destination(&ticket_to("οδος")).unwrap();
        dc.tally_total_and_destination(&ticket_to("οδοσ")).unwrap();
        dc.tally_total_and_destination(&ticket_to("οδοι")).unwrap();

        assert_eq!(dc.destination_matches(), 2);
        assert_eq!(dc.total(), 3);
    }

    #[test]
    fn test_period_matches() {
        let cases = [
            (Period::Night, "22:00", 1),
            (Period::Dawn, "02:00", 1),
            (Period::Afternoon, "12:30", 1),
            (Period::Night, "10:00", 0),
            (Period::Morning, "09:00", 1),
            (Period::Dawn, "06:00", 1),
            (Period::Morning, "06:00", 0),
            (Period::Morning, "12:00", 1),
            (Period::Afternoon, "19:00", 1),
            (Period::Night, "19:00", 0),
            (Period::Night, "23:59", 1),
            (Period::Dawn, "00:00", 1),
        ];

        for (period, time, expected) in cases {
            let mut dc = counter("Brazil", period);
            dc.tally_period(&ticket_at(time)).unwrap();
            assert_eq!(
                dc.period_matches(),
                expected,
                "period {} at {}",
                period,
                time
            );
        }
    }

    #[test]
    fn test_invalid_time_fails_without_counting() {
        let mut dc = counter("Brazil", Period::Night);

        let err = dc.tally_period(&ticket_at("invalid")).unwrap_err();

        assert!(matches!(err, TicketError::InvalidTime { .. }));
        assert_eq!(dc.period_matches(), 0);
    }

    #[test]
    fn test_out_of_range_time_is_rejected() {
        assert!(classify_time("24:00").is_err());
        assert!(classify_time("12:60").is_err());
        assert!(classify_time("").is_err());
    }

    #[test]
    fn test_malformed_time_shape_is_rejected() {
        for value in ["12:5", " 17:11", "17:11 ", "7:5", "123:00", "12-30", "12:30:00", "+1:30"] {
            let err = classify_time(value).unwrap_err();
            assert!(
                matches!(err, TicketError::InvalidTime { value: ref v, .. } if v == value),
                "{:?} should be rejected",
                value
            );
        }
        assert_eq!(classify_time("7:05").unwrap(), Period::Morning);
    }

    #[test]
    fn test_counts_never_exceed_total() {
        let mut dc = counter("Brazil", Period::Morning);
        for (destination, time) in [("Brazil", "08:00"), ("Chile", "09:15"), ("brazil", "22:40")] {
            let ticket = Ticket {
                destination: destination.to_string(),
                time: time.to_string(),
                ..Default::default()
            };
            dc.tally_total_and_destination(&ticket).unwrap();
            dc.tally_period(&ticket).unwrap();
        }

        assert_eq!(dc.total(), 3);
        assert_eq!(dc.destination_matches(), 2);
        assert_eq!(dc.period_matches(), 2);

        let summary = dc.summary();
        assert_eq!(summary.total_tickets, 3);
        assert!((summary.destination_percentage - 200.0 / 3.0).abs() < 1e-9);
    }
}
