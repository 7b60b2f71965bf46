use std::fmt;

use serde::Serialize;

use super::{
    Record,
    parser::{check_arity, parse_field, parse_id},
};
use crate::error::BookError;

const MAX_RATING: f32 = 5.0;

/// A book from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: u64,
    isbn: String,
    authors: String,
    original_publication_year: i32,
    original_title: String,
    average_rating: f32,
    ratings_count: u64,
    image_url: String,
}

impl Book {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn original_publication_year(&self) -> i32 {
        self.original_publication_year
    }

    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    pub fn average_rating(&self) -> f32 {
        self.average_rating
    }

    pub fn ratings_count(&self) -> u64 {
        self.ratings_count
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book[id={}, isbn={}, authors={}, year={}, title={}, rating={}, ratings_count={}]",
            self.id,
            self.isbn,
            self.authors,
            self.original_publication_year,
            self.original_title,
            self.average_rating,
            self.ratings_count
        )
    }
}

/// Publication years come either as integers or as integral decimals
/// (`1997.0`).
fn parse_year(value: &str) -> Result<i32, BookError> {
    let invalid = || BookError::InvalidField {
        field: "original_publication_year",
        value: value.to_string(),
    };

    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }

    let year: f64 = value.parse().map_err(|_| invalid())?;
    if year.fract() != 0.0 || year < i32::MIN as f64 || year > i32::MAX as f64 {
        return Err(invalid());
    }
    Ok(year as i32)
}

impl Record for Book {
    const NAME: &'static str = "Book";
    const ATTRIBUTE_COUNT: usize = 8;

    fn id(&self) -> u64 {
        self.id
    }

    /// Fields: book id, isbn, authors, original publication year, original
    /// title, average rating, ratings count and image url.
    fn from_fields(fields: &[&str]) -> Result<Self, BookError> {
        check_arity::<Self>(fields)?;

        BookBuilder::new(parse_id(fields[0])?)
            .isbn(fields[1])
            .authors(fields[2])
            .original_publication_year(parse_year(fields[3])?)
            .original_title(fields[4])
            .average_rating(parse_field("average_rating", fields[5])?)
            .ratings_count(parse_field("ratings_count", fields[6])?)
            .image_url(fields[7])
            .build()
    }
}

/// Builder for [`Book`]. The average rating must lie within `0..=5`.
#[derive(Debug, Default)]
pub struct BookBuilder {
    id: u64,
    isbn: String,
    authors: String,
    original_publication_year: i32,
    original_title: String,
    average_rating: f32,
    ratings_count: u64,
    image_url: String,
}

impl BookBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
    }

    pub fn authors(mut self, authors: &str) -> Self {
        self.authors = authors.to_string();
        self
    }

    pub fn original_publication_year(mut self, year: i32) -> Self {
        self.original_publication_year = year;
        self
    }

    pub fn original_title(mut self, original_title: &str) -> Self {
        self.original_title = original_title.to_string();
        self
    }

    pub fn average_rating(mut self, average_rating: f32) -> Self {
        self.average_rating = average_rating;
        self
    }

    pub fn ratings_count(mut self, ratings_count: u64) -> Self {
        self.ratings_count = ratings_count;
        self
    }

    pub fn image_url(mut self, image_url: &str) -> Self {
        self.image_url = image_url.to_string();
        self
    }

    pub fn build(self) -> Result<Book, BookError> {
        if !(0.0..=MAX_RATING).contains(&self.average_rating) {
            return Err(BookError::InvalidField {
                field: "average_rating",
                value: self.average_rating.to_string(),
            });
        }

        Ok(Book {
            id: self.id,
            isbn: self.isbn,
            authors: self.authors,
            original_publication_year: self.original_publication_year,
            original_title: self.original_title,
            average_rating: self.average_rating,
            ratings_count: self.ratings_count,
            image_url: self.image_url,
        })
    }
}
