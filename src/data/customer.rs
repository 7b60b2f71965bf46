use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    Record,
    parser::{check_arity, parse_id},
    validator,
};
use crate::error::BookError;

/// A bookstore customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: u64,
    first_name: String,
    last_name: String,
    street: String,
    city: String,
    postal_code: String,
    phone: String,
    email_address: String,
    joined_date: NaiveDate,
}

impl Customer {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn joined_date(&self) -> NaiveDate {
        self.joined_date
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer[id={}, first_name={}, last_name={}, street={}, city={}, postal_code={}, phone={}, email_address={}, joined_date={}]",
            self.id,
            self.first_name,
            self.last_name,
            self.street,
            self.city,
            self.postal_code,
            self.phone,
            self.email_address,
            self.joined_date
        )
    }
}

impl Record for Customer {
    const NAME: &'static str = "Customer";
    const ATTRIBUTE_COUNT: usize = 9;

    fn id(&self) -> u64 {
        self.id
    }

    /// Fields: id, first name, last name, street, city, postal code, phone,
    /// email address and joined date (`YYYYMMDD`).
    fn from_fields(fields: &[&str]) -> Result<Self, BookError> {
        check_arity::<Self>(fields)?;

        let id = parse_id(fields[0])?;

        let email_address = fields[7];
        if !validator::validate_email(email_address) {
            return Err(BookError::InvalidEmail(email_address.to_string()));
        }

        let yyyymmdd = fields[8];
        let (year, month, day) =
            validator::joined_date_parts(yyyymmdd).ok_or_else(|| BookError::InvalidDate {
                value: yyyymmdd.to_string(),
                id,
            })?;

        CustomerBuilder::new(id, fields[6])
            .first_name(fields[1])
            .last_name(fields[2])
            .street(fields[3])
            .city(fields[4])
            .postal_code(fields[5])
            .email_address(email_address)
            .joined_date(year, month, day)
            .build()
    }
}

/// Builder for [`Customer`].
///
/// The id and phone are mandatory and taken up front; the joined date must be
/// set before [`build`](CustomerBuilder::build) and must be a real calendar day.
///
/// ```
/// use bookstore::data::CustomerBuilder;
///
/// let customer = CustomerBuilder::new(7, "555-0007")
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .email_address("ada@example.com")
///     .joined_date(2020, 2, 29)
///     .build()
///     .unwrap();
/// assert_eq!(customer.full_name(), "Ada Lovelace");
///
/// let leap_error = CustomerBuilder::new(8, "555-0008")
///     .joined_date(2021, 2, 29)
///     .build();
/// assert!(leap_error.is_err());
/// ```
#[derive(Debug, Default)]
pub struct CustomerBuilder {
    id: u64,
    phone: String,
    first_name: String,
    last_name: String,
    street: String,
    city: String,
    postal_code: String,
    email_address: String,
    joined_date: Option<(i32, u32, u32)>,
}

impl CustomerBuilder {
    pub fn new(id: u64, phone: &str) -> Self {
        Self {
            id,
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    pub fn first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    pub fn last_name(mut self, last_name: &str) -> Self {
        self.last_name = last_name.to_string();
        self
    }

    pub fn street(mut self, street: &str) -> Self {
        self.street = street.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = postal_code.to_string();
        self
    }

    pub fn email_address(mut self, email_address: &str) -> Self {
        self.email_address = email_address.to_string();
        self
    }

    pub fn joined_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.joined_date = Some((year, month, day));
        self
    }

    pub fn build(self) -> Result<Customer, BookError> {
        let (year, month, day) = self
            .joined_date
            .ok_or(BookError::MissingField("joined_date"))?;
        let joined_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(BookError::InvalidCalendarDate { year, month, day })?;

        Ok(Customer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            phone: self.phone,
            email_address: self.email_address,
            joined_date,
        })
    }
}
