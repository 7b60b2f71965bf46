#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Bookstore

 Loads the customers, books and purchases of a small bookstore from delimited
 text files, validates every line, and prints tabular reports.

 ## Core Concepts

- **Record:** a `Customer`, `Book` or `Purchase`, built through a builder that
  refuses impossible values and immutable afterwards.
- **ItemReader:** retrieves records one line at a time. A line that fails to
  parse is a recoverable error; the reader moves on to the next line.
- **LoadStep:** reads a whole file into a `Dataset` keyed by id. Bad lines are
  logged and dropped, duplicate ids are logged and the later line wins.
- **LoadJob:** runs the customer, book and purchase steps in that order. A
  missing file or a read failure aborts the whole load.
- **ItemWriter:** renders records, e.g. as a fixed-width report.

 ## Features

| **Feature** | **Description**                                   |
|-------------|---------------------------------------------------|
| json        | Enables `JsonItemWriter`, exporting records as JSON (default, needed by the `bookstore` binary) |
| full        | Enables all available features                    |

 ## Getting Started

```rust,no_run
use bookstore::{
    core::job::LoadJobBuilder,
    error::BookError,
    item::report::{report_writer::ReportItemWriterBuilder, write_report},
};

fn main() -> Result<(), BookError> {
    let data = LoadJobBuilder::new().data_dir("data").build().run()?;

    let writer = ReportItemWriterBuilder::new()
        .title("Customers Report")
        .from_writer(std::io::stdout());
    write_report(&data.customers().sorted(), &writer)?;

    Ok(())
}
```

 ## Data files

 Every file starts with a header line, which is skipped.

 - `customers.dat`: `id|first name|last name|street|city|postal code|phone|email|YYYYMMDD`
 - `books500.csv`: `book_id,isbn,authors,original_publication_year,original_title,average_rating,ratings_count,image_url`
 - `purchases.csv`: `id,customer_id,book_id,price`
 */

/// Steps and jobs loading the datasets
pub mod core;

/// Customer, book and purchase records
pub mod data;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

/// Item readers and writers (delimited files, reports)
pub mod item;
