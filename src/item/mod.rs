/// Delimited text readers for the customer, book and purchase files.
pub mod delimited;

/// Fixed-width report writer.
pub mod report;

#[cfg(feature = "json")]
/// JSON export of records.
pub mod json;
