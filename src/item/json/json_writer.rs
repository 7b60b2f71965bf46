use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::BookError,
};

/// Writes items as a JSON array, one element per item.
pub struct JsonItemWriter<W: Write> {
    stream: RefCell<W>,
    use_pretty_formatter: bool,
    is_first_element: Cell<bool>,
}

fn write_error<E: ToString>(error: E) -> BookError {
    BookError::ItemWriter(error.to_string())
}

impl<W: Write> JsonItemWriter<W> {
    fn write_bytes(&self, bytes: &[u8]) -> ItemWriterResult {
        self.stream.borrow_mut().write_all(bytes).map_err(write_error)
    }

    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<W: Write, T: Serialize> ItemWriter<T> for JsonItemWriter<W> {
    fn write(&self, items: &[T]) -> ItemWriterResult {
        for item in items {
            if !self.is_first_element.get() {
                self.write_bytes(b",")?;
            }
            self.is_first_element.set(false);

            let json = if self.use_pretty_formatter {
                serde_json::to_string_pretty(item)
            } else {
                serde_json::to_string(item)
            }
            .map_err(write_error)?;
            self.write_bytes(json.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream.borrow_mut().flush().map_err(write_error)
    }

    fn open(&self) -> ItemWriterResult {
        self.is_first_element.set(true);
        self.write_bytes(b"[")
    }

    fn close(&self) -> ItemWriterResult {
        self.write_bytes(b"]\n")?;
        ItemWriter::<T>::flush(self)
    }
}

#[derive(Debug, Default)]
pub struct JsonItemWriterBuilder {
    pretty_formatter: bool,
}

impl JsonItemWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty_formatter(mut self, yes: bool) -> Self {
        self.pretty_formatter = yes;
        self
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> JsonItemWriter<W> {
        JsonItemWriter {
            stream: RefCell::new(wtr),
            use_pretty_formatter: self.pretty_formatter,
            is_first_element: Cell::new(true),
        }
    }

    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<JsonItemWriter<BufWriter<File>>, BookError> {
        let file = File::create(path).map_err(write_error)?;
        Ok(self.from_writer(BufWriter::new(file)))
    }
}
