use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
/// Bookstore error
pub enum BookError {
    #[error("Unable to open {}: {source}", .path.display())]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O failure while reading: {0}")]
    IoFailure(String),

    #[error("Expected {expected} but got {actual}: {fields:?}")]
    MalformedRecord {
        expected: usize,
        actual: usize,
        fields: Vec<String>,
    },

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid joined date: {value} for customer {id}")]
    InvalidDate { value: String, id: u64 },

    #[error("Invalid date {year:04}-{month:02}-{day:02}: no such day in the calendar")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unreadable record: {0}")]
    UnreadableRecord(String),

    #[error("ItemWriter from: {0}")]
    ItemWriter(String),
}

impl BookError {
    /// Returns `true` when the error must abort the whole load or report.
    ///
    /// Everything else is tied to a single line: the line is dropped and
    /// the load goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BookError::DataSourceUnavailable { .. }
                | BookError::IoFailure(_)
                | BookError::ItemWriter(_)
        )
    }
}

impl From<io::Error> for BookError {
    fn from(error: io::Error) -> Self {
        BookError::IoFailure(error.to_string())
    }
}
