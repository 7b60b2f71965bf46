//! Fixed-width tabular reports.
//!
//! A report is a title, a header row, a separator and one row per item,
//! closed by a footer with the row count (and a grand total for rows that
//! carry an amount). [`report_writer::ReportItemWriter`] renders any
//! [`TableRow`] to a console or a file.

use crate::{
    core::{item::ItemWriter, job::PurchaseLine},
    data::{Book, Customer},
    error::BookError,
};

pub mod report_writer;

pub const CUSTOMERS_REPORT_FILENAME: &str = "customers_report.txt";
pub const BOOKS_REPORT_FILENAME: &str = "books_report.txt";
pub const PURCHASES_REPORT_FILENAME: &str = "purchases_report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    pub align: Align,
}

const fn left(title: &'static str, width: usize) -> Column {
    Column {
        title,
        width,
        align: Align::Left,
    }
}

const fn right(title: &'static str, width: usize) -> Column {
    Column {
        title,
        width,
        align: Align::Right,
    }
}

/// An item that can be printed as one report row.
pub trait TableRow {
    fn columns() -> &'static [Column];

    /// One cell per column, unpadded.
    fn cells(&self) -> Vec<String>;

    /// Amount added to the report total, if the row has one.
    fn amount(&self) -> Option<f64> {
        None
    }
}

impl<T: TableRow> TableRow for &T {
    fn columns() -> &'static [Column] {
        T::columns()
    }

    fn cells(&self) -> Vec<String> {
        T::cells(*self)
    }

    fn amount(&self) -> Option<f64> {
        T::amount(*self)
    }
}

const CUSTOMER_COLUMNS: [Column; 9] = [
    right("ID", 5),
    left("First name", 12),
    left("Last name", 12),
    left("Street", 24),
    left("City", 14),
    left("Postal Code", 12),
    left("Phone", 14),
    left("Email", 30),
    left("Join Date", 11),
];

impl TableRow for Customer {
    fn columns() -> &'static [Column] {
        &CUSTOMER_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.street().to_string(),
            self.city().to_string(),
            self.postal_code().to_string(),
            self.phone().to_string(),
            self.email_address().to_string(),
            self.joined_date().format("%b %d %Y").to_string(),
        ]
    }
}

const BOOK_COLUMNS: [Column; 7] = [
    right("ID", 6),
    left("ISBN", 12),
    left("Authors", 40),
    right("Year", 5),
    left("Title", 40),
    right("Rating", 6),
    right("Ratings", 9),
];

impl TableRow for Book {
    fn columns() -> &'static [Column] {
        &BOOK_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.isbn().to_string(),
            self.authors().to_string(),
            self.original_publication_year().to_string(),
            self.original_title().to_string(),
            format!("{:.2}", self.average_rating()),
            self.ratings_count().to_string(),
        ]
    }
}

const PURCHASE_COLUMNS: [Column; 4] = [
    right("ID", 6),
    left("Customer", 25),
    left("Title", 50),
    right("Price", 10),
];

impl TableRow for PurchaseLine<'_> {
    fn columns() -> &'static [Column] {
        &PURCHASE_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        let customer = match self.customer {
            Some(customer) => customer.full_name(),
            None => format!("<unknown customer {}>", self.purchase.customer_id()),
        };
        let title = match self.book {
            Some(book) => book.original_title().to_string(),
            None => format!("<unknown book {}>", self.purchase.book_id()),
        };

        vec![
            self.purchase.id().to_string(),
            customer,
            title,
            format!("{:.2}", self.purchase.price()),
        ]
    }

    fn amount(&self) -> Option<f64> {
        Some(self.purchase.price())
    }
}

/// Writes `items` as a complete report: open, rows, flush, close.
pub fn write_report<T>(items: &[T], writer: &dyn ItemWriter<T>) -> Result<(), BookError> {
    writer.open()?;
    writer.write(items)?;
    writer.flush()?;
    writer.close()
}
