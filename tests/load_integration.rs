mod common;

use anyhow::Result;
use chrono::NaiveDate;
use log::Level;

use bookstore::{
    core::{
        job::LoadJobBuilder,
        step::{LoadStepBuilder, StepStatus},
    },
    data::Customer,
    error::BookError,
    item::delimited::{DataSource, delimited_reader::DelimitedItemReaderBuilder},
};

use common::{BOOKS, CUSTOMERS, PURCHASES, capture_logs, data_dir, full_data_dir, logged};

#[test]
fn load_all_datasets_skipping_bad_lines() -> Result<()> {
    let dir = full_data_dir();

    let data = LoadJobBuilder::new().data_dir(dir.path()).build().run()?;

    let customers = data.customers();
    assert_eq!(customers.len(), 2);
    assert!(customers.contains_key(1));
    assert!(customers.contains_key(6));

    let books = data.books();
    assert_eq!(books.len(), 2);
    assert_eq!(
        books.get(2).map(|book| book.authors()),
        Some("J.K. Rowling, Mary GrandPré")
    );
    assert!(!books.contains_key(3));

    let purchase_ids: Vec<u64> = data.purchases().sorted().iter().map(|p| p.id()).collect();
    assert_eq!(purchase_ids, vec![1, 2, 3]);

    Ok(())
}

#[test]
fn end_to_end_customer_line() -> Result<()> {
    let dir = full_data_dir();

    let data = LoadJobBuilder::new().data_dir(dir.path()).build().run()?;
    let john = data.customers().get(1).expect("customer 1 should load");

    assert_eq!(john.id(), 1);
    assert_eq!(john.first_name(), "John");
    assert_eq!(john.email_address(), "john@example.com");
    assert_eq!(
        john.joined_date(),
        NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
    );

    Ok(())
}

#[test]
fn duplicate_id_keeps_the_later_line() -> Result<()> {
    let dir = data_dir(&[("customers.dat", CUSTOMERS)]);
    let reader = DataSource::customers().in_dir(dir.path()).open()?;
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()?;

    let customers = step.execute()?;

    assert_eq!(customers.get(6).map(Customer::last_name), Some("Smith-Jones"));
    assert_eq!(step.get_duplicate_count(), 1);
    assert_eq!(step.get_read_count(), 3);
    assert_eq!(step.get_error_count(), 5);
    assert_eq!(step.get_status(), StepStatus::Success);

    Ok(())
}

#[test]
fn duplicate_id_is_logged_as_a_warning() -> Result<()> {
    capture_logs();
    let dir = data_dir(&[("customers.dat", CUSTOMERS)]);
    let reader = DataSource::customers().in_dir(dir.path()).open()?;
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()?;

    step.execute()?;

    assert!(logged(
        Level::Warn,
        "Customer exists: Customer[id=6, first_name=Ann, last_name=Smith-Jones"
    ));
    assert!(!logged(Level::Warn, "Customer exists: Customer[id=1,"));

    Ok(())
}

#[test]
fn trailing_delimiter_and_blank_lines_still_load() -> Result<()> {
    capture_logs();
    let dir = data_dir(&[(
        "customers.dat",
        "ID|First Name|Last Name|Street|City|Postal Code|Phone|Email|Join Date\n\
         1|John|Doe|1 Main St|Springfield|12345|555-1234|john@example.com|20200115|\n\
         \n\
         2|Jane|Roe|2 Elm St|Shelbyville|54321|555-9876|jane@example.com|20210704\n",
    )]);
    let reader = DataSource::customers().in_dir(dir.path()).open()?;
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()?;

    let customers = step.execute()?;

    assert_eq!(customers.len(), 2);
    assert_eq!(step.get_error_count(), 0);
    assert!(logged(Level::Debug, "Skipped 1 blank line(s) before line 4"));

    Ok(())
}

#[test]
fn short_line_yields_an_empty_dataset() -> Result<()> {
    let dir = data_dir(&[(
        "customers.dat",
        "ID|First Name|Last Name|Street|City|Postal Code|Phone|Email|Join Date\n\
         1|John|Doe|1 Main St|Springfield|12345|555-1234\n",
    )]);
    let reader = DataSource::customers().in_dir(dir.path()).open()?;
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()?;

    let customers = step.execute()?;

    assert!(customers.is_empty());
    assert_eq!(step.get_error_count(), 1);

    Ok(())
}

#[test]
fn loading_twice_gives_the_same_data() -> Result<()> {
    let dir = full_data_dir();
    let job = LoadJobBuilder::new().data_dir(dir.path()).build();

    let first = job.run()?;
    let second = job.run()?;

    assert_eq!(first.customers(), second.customers());
    assert_eq!(first.books(), second.books());
    assert_eq!(first.purchases(), second.purchases());

    Ok(())
}

#[test]
fn missing_books_file_aborts_the_load() {
    let dir = data_dir(&[("customers.dat", CUSTOMERS), ("purchases.csv", PURCHASES)]);

    let result = LoadJobBuilder::new().data_dir(dir.path()).build().run();

    match result {
        Err(BookError::DataSourceUnavailable { path, .. }) => {
            assert!(path.ends_with("books500.csv"))
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("load should fail without books500.csv"),
    }
}

#[test]
fn custom_sources_override_defaults() -> Result<()> {
    let clients = CUSTOMERS.replace('|', ";");
    let dir = data_dir(&[
        ("clients.txt", clients.as_str()),
        ("books500.csv", BOOKS),
        ("purchases.csv", PURCHASES),
    ]);

    let data = LoadJobBuilder::new()
        .data_dir(dir.path())
        .customers(DataSource::new("clients.txt", b';', false))
        .build()
        .run()?;

    assert_eq!(data.customers().len(), 2);

    Ok(())
}

#[test]
fn reader_without_header_reads_first_line() -> Result<()> {
    let line = "1|John|Doe|1 Main St|Springfield|12345|555-1234|john@example.com|20200115\n";
    let reader = DelimitedItemReaderBuilder::new()
        .delimiter(b'|')
        .quoting(false)
        .has_headers(false)
        .from_reader(line.as_bytes());
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()?;

    assert_eq!(step.execute()?.len(), 1);

    Ok(())
}
