use std::fmt;

use serde::Serialize;

use super::{
    Record,
    parser::{check_arity, parse_field, parse_id},
};
use crate::error::BookError;

/// A book bought by a customer.
///
/// `customer_id` and `book_id` refer to the customer and book datasets; they
/// are not checked at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    id: u64,
    customer_id: u64,
    book_id: u64,
    price: f64,
}

impl Purchase {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn customer_id(&self) -> u64 {
        self.customer_id
    }

    pub fn book_id(&self) -> u64 {
        self.book_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchase[id={}, customer_id={}, book_id={}, price={:.2}]",
            self.id, self.customer_id, self.book_id, self.price
        )
    }
}

impl Record for Purchase {
    const NAME: &'static str = "Purchase";
    const ATTRIBUTE_COUNT: usize = 4;

    fn id(&self) -> u64 {
        self.id
    }

    /// Fields: id, customer id, book id and price.
    fn from_fields(fields: &[&str]) -> Result<Self, BookError> {
        check_arity::<Self>(fields)?;

        PurchaseBuilder::new(parse_id(fields[0])?)
            .customer_id(parse_id(fields[1])?)
            .book_id(parse_id(fields[2])?)
            .price(parse_field("price", fields[3])?)
            .build()
    }
}

#[derive(Debug, Default)]
pub struct PurchaseBuilder {
    id: u64,
    customer_id: Option<u64>,
    book_id: Option<u64>,
    price: f64,
}

impl PurchaseBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn book_id(mut self, book_id: u64) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn build(self) -> Result<Purchase, BookError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(BookError::InvalidField {
                field: "price",
                value: self.price.to_string(),
            });
        }

        Ok(Purchase {
            id: self.id,
            customer_id: self.customer_id.ok_or(BookError::MissingField("customer_id"))?,
            book_id: self.book_id.ok_or(BookError::MissingField("book_id"))?,
            price: self.price,
        })
    }
}
