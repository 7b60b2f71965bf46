//! Delimited text files: one header line followed by one record per line.
//!
//! [`delimited_reader::DelimitedItemReader`] turns each line into a record,
//! and [`DataSource`] describes where a dataset lives and how its lines are
//! delimited.
//!
//! | Dataset   | Default file     | Delimiter | Quoting |
//! |-----------|------------------|-----------|---------|
//! | customers | `customers.dat`  | `\|`      | off     |
//! | books     | `books500.csv`   | `,`       | on      |
//! | purchases | `purchases.csv`  | `,`       | on      |

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::error::BookError;

use self::delimited_reader::{DelimitedItemReader, DelimitedItemReaderBuilder};

pub mod delimited_reader;

pub const CUSTOMERS_FILENAME: &str = "customers.dat";
pub const BOOKS_FILENAME: &str = "books500.csv";
pub const PURCHASES_FILENAME: &str = "purchases.csv";

/// Location and format of one data file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    path: PathBuf,
    delimiter: u8,
    quoting: bool,
}

impl DataSource {
    pub fn new<P: AsRef<Path>>(path: P, delimiter: u8, quoting: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter,
            quoting,
        }
    }

    pub fn customers() -> Self {
        Self::new(CUSTOMERS_FILENAME, b'|', false)
    }

    pub fn books() -> Self {
        Self::new(BOOKS_FILENAME, b',', true)
    }

    pub fn purchases() -> Self {
        Self::new(PURCHASES_FILENAME, b',', true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves a relative path against `dir`; absolute paths are kept.
    pub fn in_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        if self.path.is_relative() {
            self.path = dir.as_ref().join(&self.path);
        }
        self
    }

    /// Opens the file for reading, header line expected.
    pub fn open(&self) -> Result<DelimitedItemReader<File>, BookError> {
        DelimitedItemReaderBuilder::new()
            .delimiter(self.delimiter)
            .quoting(self.quoting)
            .has_headers(true)
            .from_path(&self.path)
    }
}
