use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::Read,
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use log::debug;

use crate::{
    core::item::{ItemReader, ItemReaderResult},
    data::{Record, parser::without_trailing_empty},
    error::BookError,
};

/// Reads records out of a delimited text source, one line at a time.
///
/// The first line is a header and is skipped without being looked at. Each
/// following line is split on the delimiter and handed to
/// [`Record::from_fields`]. A line that does not parse is returned as a
/// recoverable error; the next call moves on to the following line.
///
/// Field counts are not enforced by the underlying csv reader: arity is the
/// record's business, so a short line surfaces as
/// [`BookError::MalformedRecord`]. Trailing empty fields are dropped before
/// the record sees them.
///
/// # Examples
///
/// ```
/// use bookstore::core::item::ItemReader;
/// use bookstore::data::Purchase;
/// use bookstore::item::delimited::delimited_reader::DelimitedItemReaderBuilder;
///
/// let data = "id,customer_id,book_id,price\n1,3,7,12.50\n2,3\n";
/// let reader = DelimitedItemReaderBuilder::new().from_reader(data.as_bytes());
///
/// let purchase: Purchase = reader.read().unwrap().unwrap();
/// assert_eq!(purchase.book_id(), 7);
///
/// assert!(ItemReader::<Purchase>::read(&reader).is_err());
/// assert!(ItemReader::<Purchase>::read(&reader).unwrap().is_none());
/// ```
pub struct DelimitedItemReader<R> {
    records: RefCell<StringRecordsIntoIter<R>>,
    // line the next record should start on; a later start means blank lines
    next_line: Cell<u64>,
}

impl<R: Read> DelimitedItemReader<R> {
    fn note_blank_lines(&self, record: &StringRecord) {
        if let Some(position) = record.position() {
            let skipped = position.line().saturating_sub(self.next_line.get());
            if skipped > 0 {
                debug!(
                    "Skipped {} blank line(s) before line {}",
                    skipped,
                    position.line()
                );
            }
        }
    }
}

impl<R: Read, T: Record> ItemReader<T> for DelimitedItemReader<R> {
    fn read(&self) -> ItemReaderResult<T> {
        let mut records = self.records.borrow_mut();
        let result = match records.next() {
            Some(Ok(string_record)) => {
                self.note_blank_lines(&string_record);
                debug!("line: {}", join(&string_record));
                let fields: Vec<&str> = string_record.iter().collect();
                T::from_fields(without_trailing_empty(&fields)).map(Some)
            }
            Some(Err(error)) if error.is_io_error() => {
                Err(BookError::IoFailure(error.to_string()))
            }
            Some(Err(error)) => Err(BookError::UnreadableRecord(error.to_string())),
            None => Ok(None),
        };
        self.next_line.set(records.reader().position().line());
        result
    }
}

fn join(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join("|")
}

/// A builder for configuring delimited file reading.
///
/// Defaults: comma delimiter, header line present, double-quote quoting on.
#[derive(Debug)]
pub struct DelimitedItemReaderBuilder {
    delimiter: u8,
    has_headers: bool,
    quoting: bool,
}

impl Default for DelimitedItemReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedItemReaderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            quoting: true,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Whether the first line is a header to skip.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Whether double quotes enclose fields. Turn it off for files where a
    /// quote is ordinary text.
    pub fn quoting(mut self, yes: bool) -> Self {
        self.quoting = yes;
        self
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .quoting(self.quoting)
            .trim(Trim::None)
            .flexible(true);
        builder
    }

    pub fn from_reader<R: Read>(self, rdr: R) -> DelimitedItemReader<R> {
        let records = self.reader_builder().from_reader(rdr).into_records();

        DelimitedItemReader {
            records: RefCell::new(records),
            next_line: Cell::new(if self.has_headers { 2 } else { 1 }),
        }
    }

    /// Opens `path` for reading.
    ///
    /// The file stays open for as long as the returned reader lives and is
    /// closed when it is dropped.
    ///
    /// # Errors
    /// [`BookError::DataSourceUnavailable`] if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<DelimitedItemReader<File>, BookError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BookError::DataSourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading {}", path.display());

        Ok(self.from_reader(file))
    }
}
