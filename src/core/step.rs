use std::{
    cell::Cell,
    collections::{HashMap, hash_map},
    time::Instant,
};

use log::{debug, error, info, warn};

use crate::{data::Record, error::BookError};

use super::item::ItemReader;

/// Every record of one entity type, keyed by id.
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    records: HashMap<u64, T>,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for Dataset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<T: Record> Dataset<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record`, returning the record it replaced if the id was taken.
    pub fn insert(&mut self, record: T) -> Option<T> {
        self.records.insert(record.id(), record)
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn contains_key(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in no particular order.
    pub fn iter(&self) -> hash_map::Values<'_, u64, T> {
        self.records.values()
    }

    /// Records ordered by id.
    pub fn sorted(&self) -> Vec<&T> {
        let mut records: Vec<&T> = self.records.values().collect();
        records.sort_by_key(|record| record.id());
        records
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Starting,
    Started,
    Success,
    Failed,
}

/// Reads a whole dataset out of an [`ItemReader`].
///
/// Lines that fail to parse are logged and skipped. A record whose id was
/// already read replaces the earlier one, with a warning. Only a fatal reader
/// error (the source went away mid-read) stops the step.
pub struct LoadStep<'a, T> {
    name: String,
    reader: &'a dyn ItemReader<T>,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    error_count: Cell<usize>,
    duplicate_count: Cell<usize>,
}

impl<T: Record> LoadStep<'_, T> {
    pub fn execute(&self) -> Result<Dataset<T>, BookError> {
        let start = Instant::now();
        info!("Start of step: {}", self.name);
        self.status.set(StepStatus::Started);

        let mut dataset = Dataset::new();
        let mut line: usize = 0;

        loop {
            line += 1;
            match self.reader.read() {
                Ok(Some(record)) => {
                    self.read_count.set(self.read_count.get() + 1);
                    let id = record.id();
                    if dataset.contains_key(id) {
                        warn!("{} exists: {}", T::NAME, record);
                        self.duplicate_count.set(self.duplicate_count.get() + 1);
                    }
                    debug!("Added {} as {}", record, id);
                    dataset.insert(record);
                }
                Ok(None) => break,
                Err(err) if err.is_fatal() => {
                    self.status.set(StepStatus::Failed);
                    error!("Step {} failed at record {}: {}", self.name, line, err);
                    return Err(err);
                }
                Err(err) => {
                    self.error_count.set(self.error_count.get() + 1);
                    error!("{} record {} skipped: {}", T::NAME, line, err);
                }
            }
        }

        self.status.set(StepStatus::Success);
        info!(
            "End of step: {}, {} read, {} skipped, {} duplicates, {} kept in {:?}",
            self.name,
            self.read_count.get(),
            self.error_count.get(),
            self.duplicate_count.get(),
            dataset.len(),
            start.elapsed()
        );

        Ok(dataset)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    /// Records parsed successfully, duplicates included.
    pub fn get_read_count(&self) -> usize {
        self.read_count.get()
    }

    /// Lines skipped because they failed to parse.
    pub fn get_error_count(&self) -> usize {
        self.error_count.get()
    }

    pub fn get_duplicate_count(&self) -> usize {
        self.duplicate_count.get()
    }
}

pub struct LoadStepBuilder<'a, T> {
    name: String,
    reader: Option<&'a dyn ItemReader<T>>,
}

impl<'a, T> LoadStepBuilder<'a, T> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reader: None,
        }
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<T>) -> Self {
        self.reader = Some(reader as &dyn ItemReader<T>);
        self
    }

    pub fn build(self) -> Result<LoadStep<'a, T>, BookError> {
        Ok(LoadStep {
            name: self.name,
            reader: self.reader.ok_or(BookError::MissingField("reader"))?,
            status: Cell::new(StepStatus::Starting),
            read_count: Cell::new(0),
            error_count: Cell::new(0),
            duplicate_count: Cell::new(0),
        })
    }
}
