use crate::core::{Result, Ticket, TicketProcessor};
use crate::utils::error::TicketError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Streams tickets from a comma-separated file into a [`TicketProcessor`].
///
/// The file has no header row and exactly six columns per line. Blank lines
/// are skipped; any other line with the wrong column count aborts the pass.
/// Tallies already applied before a failure are not rolled back.
#[derive(Debug, Clone)]
pub struct TicketLoader {
    path: PathBuf,
}

impl TicketLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs one pass over the file and returns how many tickets were delivered.
    pub fn load_and_process<P>(&self, processor: &mut P) -> Result<usize>
    where
        P: TicketProcessor + ?Sized,
    {
        let file = File::open(&self.path).map_err(|source| TicketError::SourceOpen {
            path: self.path.display().to_string(),
            source,
        })?;

        tracing::info!("📂 Reading tickets from {}", self.path.display());
        let result = Self::process_reader(file, processor);

        match &result {
            Ok(count) => tracing::info!("✅ Processed {} tickets", count),
            Err(e) => tracing::warn!("❌ Pass over {} aborted: {}", self.path.display(), e),
        }

        result
    }

    /// Same as [`load_and_process`](Self::load_and_process) for an already open stream.
    pub fn process_reader<R, P>(reader: R, processor: &mut P) -> Result<usize>
    where
        R: Read,
        P: TicketProcessor + ?Sized,
    {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut record = csv::StringRecord::new();
        let mut processed = 0;

        while csv_reader.read_record(&mut record)? {
            let ticket = parse_record(&record)?;
            tracing::debug!(
                id = %ticket.id,
                destination = %ticket.destination,
                time = %ticket.time,
                "ticket parsed"
            );

            processor.tally_total_and_destination(&ticket)?;
            processor.tally_period(&ticket)?;
            processed += 1;
        }

        Ok(processed)
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<Ticket> {
    let line = record.position().map(|pos| pos.line()).unwrap_or_default();
    let fields: Vec<&str> = record.iter().collect();
    let fields: [&str; Ticket::FIELD_COUNT] = fields.try_into().map_err(|fields: Vec<&str>| {
        TicketError::InvalidRecord {
            line,
            found: fields.len(),
        }
    })?;

    Ok(Ticket::from_fields(fields))
}
