use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use log::info;
use uuid::Uuid;

use crate::{
    data::{Book, Customer, Purchase, Record},
    error::BookError,
    item::delimited::DataSource,
};

use super::{
    build_name,
    step::{Dataset, LoadStepBuilder},
};

/// Timing of one job run.
#[derive(Debug, Clone, Copy)]
pub struct JobExecution {
    pub start: Instant,
    pub end: Instant,
}

impl JobExecution {
    pub fn duration(&self) -> Duration {
        self.end.duration_since(self.start)
    }
}

/// The three datasets of a successful load.
///
/// Nothing can be added or removed once the load is done; a new run reads
/// the files again.
#[derive(Debug)]
pub struct BookStoreData {
    customers: Dataset<Customer>,
    books: Dataset<Book>,
    purchases: Dataset<Purchase>,
    execution: Option<JobExecution>,
}

/// A purchase together with the customer and book it points at.
///
/// A reference that does not resolve is `None`.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseLine<'a> {
    pub purchase: &'a Purchase,
    pub customer: Option<&'a Customer>,
    pub book: Option<&'a Book>,
}

impl BookStoreData {
    pub fn new(
        customers: Dataset<Customer>,
        books: Dataset<Book>,
        purchases: Dataset<Purchase>,
    ) -> Self {
        Self {
            customers,
            books,
            purchases,
            execution: None,
        }
    }

    /// When the load that produced this data ran, if it came from a [`LoadJob`].
    pub fn execution(&self) -> Option<JobExecution> {
        self.execution
    }

    pub fn customers(&self) -> &Dataset<Customer> {
        &self.customers
    }

    pub fn books(&self) -> &Dataset<Book> {
        &self.books
    }

    pub fn purchases(&self) -> &Dataset<Purchase> {
        &self.purchases
    }

    /// Purchases ordered by id, each joined with its customer and book.
    pub fn purchase_lines(&self) -> Vec<PurchaseLine<'_>> {
        self.purchases
            .sorted()
            .into_iter()
            .map(|purchase| PurchaseLine {
                purchase,
                customer: self.customers.get(purchase.customer_id()),
                book: self.books.get(purchase.book_id()),
            })
            .collect()
    }
}

/// Loads customers, then books, then purchases.
///
/// Any fatal error stops the job and nothing is returned: callers either get
/// all three datasets or none.
#[derive(Debug)]
pub struct LoadJob {
    id: Uuid,
    name: String,
    customers: DataSource,
    books: DataSource,
    purchases: DataSource,
}

impl LoadJob {
    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn run(&self) -> Result<BookStoreData, BookError> {
        let start = Instant::now();
        info!("Start of job: {}, id: {}", self.name, self.id);

        let customers = load::<Customer>("customers", &self.customers)?;
        let books = load::<Book>("books", &self.books)?;
        let purchases = load::<Purchase>("purchases", &self.purchases)?;

        let execution = JobExecution {
            start,
            end: Instant::now(),
        };
        info!(
            "End of job: {}, id: {}, duration: {} ms",
            self.name,
            self.id,
            execution.duration().as_millis()
        );

        let mut data = BookStoreData::new(customers, books, purchases);
        data.execution = Some(execution);
        Ok(data)
    }
}

fn load<T: Record>(name: &str, source: &DataSource) -> Result<Dataset<T>, BookError> {
    // the file is closed when `reader` drops, on every return path
    let reader = source.open()?;
    let step = LoadStepBuilder::<T>::new(name).reader(&reader).build()?;
    step.execute()
}

/// Builder for [`LoadJob`].
///
/// Defaults to the standard file names in the working directory. `data_dir`
/// re-roots every relative path.
#[derive(Debug, Default)]
pub struct LoadJobBuilder {
    name: Option<String>,
    data_dir: Option<PathBuf>,
    customers: Option<DataSource>,
    books: Option<DataSource>,
    purchases: Option<DataSource>,
}

impl LoadJobBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn customers(mut self, source: DataSource) -> Self {
        self.customers = Some(source);
        self
    }

    pub fn books(mut self, source: DataSource) -> Self {
        self.books = Some(source);
        self
    }

    pub fn purchases(mut self, source: DataSource) -> Self {
        self.purchases = Some(source);
        self
    }

    pub fn build(self) -> LoadJob {
        let id = Uuid::new_v4();
        let data_dir = self.data_dir;
        let resolve = |source: Option<DataSource>, default: fn() -> DataSource| {
            let source = source.unwrap_or_else(default);
            match &data_dir {
                Some(dir) => source.in_dir(dir),
                None => source,
            }
        };

        LoadJob {
            id,
            name: self.name.unwrap_or_else(|| build_name(&id)),
            customers: resolve(self.customers, DataSource::customers),
            books: resolve(self.books, DataSource::books),
            purchases: resolve(self.purchases, DataSource::purchases),
        }
    }
}
