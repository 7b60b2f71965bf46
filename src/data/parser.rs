//! Line parsing shared by every record type.

use std::str::FromStr;

use super::Record;
use crate::error::BookError;

/// Splits a raw line on `delimiter`, dropping the line terminator.
///
/// Empty fields inside the line are kept; trailing empty fields are dropped,
/// so `a|b|` has two fields.
pub fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(delimiter).collect();
    without_trailing_empty(&fields).to_vec()
}

/// `fields` minus any empty fields at the end.
pub fn without_trailing_empty<'a, 'f>(fields: &'f [&'a str]) -> &'f [&'a str] {
    let len = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    &fields[..len]
}

/// Parses one raw line into a record.
///
/// # Examples
///
/// ```
/// use bookstore::data::{parser::parse_line, Customer};
///
/// let customer: Customer = parse_line(
///     "1|John|Doe|1 Main St|Springfield|12345|555-1234|john@example.com|20200115",
///     '|',
/// )
/// .unwrap();
///
/// assert_eq!(customer.id(), 1);
/// assert_eq!(customer.email_address(), "john@example.com");
/// ```
pub fn parse_line<T: Record>(line: &str, delimiter: char) -> Result<T, BookError> {
    let fields = split_line(line, delimiter);
    T::from_fields(&fields)
}

/// Fails with [`BookError::MalformedRecord`] unless `fields` holds exactly
/// `T::ATTRIBUTE_COUNT` values.
pub fn check_arity<T: Record>(fields: &[&str]) -> Result<(), BookError> {
    if fields.len() != T::ATTRIBUTE_COUNT {
        return Err(BookError::MalformedRecord {
            expected: T::ATTRIBUTE_COUNT,
            actual: fields.len(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
        });
    }
    Ok(())
}

/// Parses a non-negative integer identifier.
pub fn parse_id(value: &str) -> Result<u64, BookError> {
    value
        .parse()
        .map_err(|_| BookError::InvalidIdentifier(value.to_string()))
}

/// Parses a typed attribute, naming the attribute on failure.
pub fn parse_field<F: FromStr>(field: &'static str, value: &str) -> Result<F, BookError> {
    value.parse().map_err(|_| BookError::InvalidField {
        field,
        value: value.to_string(),
    })
}
