//! Record model of the bookstore: customers, books and purchases.
//!
//! Every record is built once, through a builder that refuses incomplete or
//! impossible values, and is immutable afterwards. Each record type also knows
//! how to build itself out of the positional fields of one delimited line.

use std::fmt::Display;

use crate::error::BookError;

pub mod book;
pub mod customer;
pub mod parser;
pub mod purchase;
pub mod validator;

pub use book::{Book, BookBuilder};
pub use customer::{Customer, CustomerBuilder};
pub use purchase::{Purchase, PurchaseBuilder};

/// A record read from one line of a data file.
pub trait Record: Sized + Display {
    /// Entity name used in log messages, e.g. `"Customer"`.
    const NAME: &'static str;

    /// Number of delimited fields a line must have.
    const ATTRIBUTE_COUNT: usize;

    /// Unique key of the record within its dataset.
    fn id(&self) -> u64;

    /// Builds a record from the fields of one line, in file order.
    fn from_fields(fields: &[&str]) -> Result<Self, BookError>;
}
