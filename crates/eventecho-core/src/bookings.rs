//! Append-only booking log.
//!
//! Bookings are persisted as CSV rows. The file is created with a header
//! on first use; afterwards each flagged event adds exactly one row and
//! rows are never rewritten.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::budget::coerce_guest_count;
use crate::error::{PersistenceError, PersistenceResult};
use crate::model::booking::TIMESTAMP_FORMAT;
use crate::model::{BookingRecord, BookingState};

/// Column names of the booking log, in file order.
pub const HEADER: [&str; 8] = [
    "Timestamp",
    "Event Type",
    "Guest Count",
    "Budget",
    "Location",
    "Email",
    "Description",
    "Status",
];

/// Handle to the booking log file.
///
/// Appends made through one handle are serialized, so callers may share
/// it across threads behind an `Arc`.
///
/// The lock lives in the handle, not on the file. The header check and the
/// append are only serialized for writers sharing one handle. Two handles
/// or two processes that both find the file missing or empty may each
/// write a header row. `read_all` then fails on the extra header with
/// [`PersistenceError::Malformed`].
#[derive(Debug)]
pub struct BookingLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl BookingLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one booking, writing the header first if the log is new.
    ///
    /// # Errors
    /// Fails if the directory or file cannot be written.
    pub fn append(&self, record: &BookingRecord) -> PersistenceResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PersistenceError::Poisoned)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(self.io_error(e)),
        };

        // Encode the whole chunk first so it lands in a single write.
        let mut chunk = Vec::new();
        {
            let mut writer = WriterBuilder::new()
                .terminator(Terminator::CRLF)
                .from_writer(&mut chunk);
            if needs_header {
                writer.write_record(HEADER)?;
            }
            writer.write_record(row(record))?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&chunk).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        log::info!(
            "Booking flagged for {} ({}) in {}",
            record.email,
            record.event_type,
            self.path.display()
        );
        Ok(())
    }

    /// Read every booking in the log, oldest first.
    ///
    /// A log that does not exist yet reads as empty.
    ///
    /// # Errors
    /// Fails on unreadable files and rows that cannot be parsed.
    pub fn read_all(&self) -> PersistenceResult<Vec<BookingRecord>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result?;
            records.push(parse_row(&row).map_err(|message| PersistenceError::Malformed {
                row: idx + 1,
                message,
            })?);
        }
        Ok(records)
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn row(record: &BookingRecord) -> [String; 8] {
    [
        record.formatted_timestamp(),
        record.event_type.clone(),
        record.guest_count.to_string(),
        record.budget_level.clone(),
        record.location.clone(),
        record.email.clone(),
        record.description.clone(),
        record.status.to_string(),
    ]
}

fn parse_row(row: &csv::StringRecord) -> Result<BookingRecord, String> {
    let field = |idx: usize| row.get(idx).unwrap_or_default();

    let timestamp = NaiveDateTime::parse_from_str(field(0), TIMESTAMP_FORMAT)
        .map_err(|e| format!("bad timestamp '{}': {e}", field(0)))?;

    Ok(BookingRecord {
        timestamp,
        event_type: field(1).to_string(),
        guest_count: coerce_guest_count(Some(field(2))),
        budget_level: field(3).to_string(),
        location: field(4).to_string(),
        email: field(5).to_string(),
        description: field(6).to_string(),
        status: BookingState::parse(field(7)),
    })
}
