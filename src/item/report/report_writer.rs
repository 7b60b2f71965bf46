use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{Align, Column, TableRow};
use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::BookError,
};

/// Renders [`TableRow`] items as a fixed-width table.
///
/// `open` prints the title and header, each `write` appends rows, and
/// `close` prints the footer. Cells wider than their column are cut.
///
/// # Examples
///
/// ```
/// use bookstore::data::PurchaseBuilder;
/// use bookstore::core::job::PurchaseLine;
/// use bookstore::item::report::{write_report, report_writer::ReportItemWriterBuilder};
///
/// let purchase = PurchaseBuilder::new(1).customer_id(4).book_id(9).price(12.5).build().unwrap();
/// let line = PurchaseLine { purchase: &purchase, customer: None, book: None };
///
/// let writer = ReportItemWriterBuilder::new().title("Purchases Report").from_writer(Vec::new());
/// write_report(&[line], &writer).unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(text.contains("<unknown customer 4>"));
/// assert!(text.contains("Total: 12.50"));
/// ```
pub struct ReportItemWriter<W: Write> {
    title: Option<String>,
    stream: RefCell<W>,
    row_count: Cell<usize>,
    total: Cell<Option<f64>>,
}

fn write_error(error: std::io::Error) -> BookError {
    BookError::ItemWriter(error.to_string())
}

fn cut(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn format_line<S: AsRef<str>>(columns: &[Column], cells: &[S]) -> String {
    let line = columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| {
            let cell = cut(cell.as_ref(), column.width);
            match column.align {
                Align::Left => format!("{:<width$}", cell, width = column.width),
                Align::Right => format!("{:>width$}", cell, width = column.width),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    line.trim_end().to_string()
}

fn separator(columns: &[Column]) -> String {
    let width = columns.iter().map(|column| column.width).sum::<usize>()
        + columns.len().saturating_sub(1);
    "-".repeat(width)
}

impl<W: Write> ReportItemWriter<W> {
    fn write_line(&self, line: &str) -> ItemWriterResult {
        writeln!(self.stream.borrow_mut(), "{}", line).map_err(write_error)
    }

    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<W: Write, T: TableRow> ItemWriter<T> for ReportItemWriter<W> {
    fn open(&self) -> ItemWriterResult {
        self.row_count.set(0);
        self.total.set(None);

        let columns = T::columns();
        if let Some(title) = &self.title {
            self.write_line(title)?;
        }
        let titles: Vec<&str> = columns.iter().map(|column| column.title).collect();
        self.write_line(&format_line(columns, &titles[..]))?;
        self.write_line(&separator(columns))
    }

    fn write(&self, items: &[T]) -> ItemWriterResult {
        for item in items {
            let cells = item.cells();
            self.write_line(&format_line(T::columns(), &cells[..]))?;
            self.row_count.set(self.row_count.get() + 1);
            if let Some(amount) = item.amount() {
                self.total.set(Some(self.total.get().unwrap_or(0.0) + amount));
            }
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream.borrow_mut().flush().map_err(write_error)
    }

    fn close(&self) -> ItemWriterResult {
        self.write_line(&separator(T::columns()))?;
        if let Some(total) = self.total.get() {
            self.write_line(&format!("Total: {:.2}", total))?;
        }
        self.write_line(&format!("{} rows", self.row_count.get()))?;
        ItemWriter::<T>::flush(self)
    }
}

#[derive(Debug, Default)]
pub struct ReportItemWriterBuilder {
    title: Option<String>,
}

impl ReportItemWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> ReportItemWriter<W> {
        ReportItemWriter {
            title: self.title,
            stream: RefCell::new(wtr),
            row_count: Cell::new(0),
            total: Cell::new(None),
        }
    }

    /// Creates (or truncates) the report file at `path`.
    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<ReportItemWriter<BufWriter<File>>, BookError> {
        let file = File::create(path).map_err(write_error)?;
        Ok(self.from_writer(BufWriter::new(file)))
    }
}
