//! JSON export of loaded records.
//!
//! Every record type serializes with serde; [`json_writer::JsonItemWriter`]
//! writes them out as one JSON array.

pub mod json_writer;

pub const CUSTOMERS_JSON_FILENAME: &str = "customers.json";
pub const BOOKS_JSON_FILENAME: &str = "books.json";
pub const PURCHASES_JSON_FILENAME: &str = "purchases.json";
