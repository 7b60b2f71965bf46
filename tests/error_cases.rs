mod common;

use std::io::{self, ErrorKind};

use bookstore::{
    core::{
        item::ItemReader,
        step::{LoadStepBuilder, StepStatus},
    },
    data::Customer,
    error::BookError,
    item::{
        delimited::delimited_reader::DelimitedItemReaderBuilder,
        report::{report_writer::ReportItemWriterBuilder, write_report},
    },
};

use common::{MockFile, MockSource};

const HEAD: &[u8] = b"ID|First Name|Last Name|Street|City|Postal Code|Phone|Email|Join Date
1|John|Doe|1 Main St|Springfield|12345|555-1234|john@example.com|20200115
";

/// A source that hands out `HEAD` and then fails.
fn failing_source() -> MockSource {
    let mut source = MockSource::default();
    let mut served = false;
    source.expect_read().returning(move |buf| {
        if served {
            return Err(io::Error::new(ErrorKind::BrokenPipe, "device unplugged"));
        }
        served = true;
        buf[..HEAD.len()].copy_from_slice(HEAD);
        Ok(HEAD.len())
    });
    source
}

#[test]
fn read_failure_mid_stream_is_fatal() {
    let reader = DelimitedItemReaderBuilder::new()
        .delimiter(b'|')
        .quoting(false)
        .from_reader(failing_source());

    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()
        .unwrap();
    let result = step.execute();

    assert!(matches!(result, Err(BookError::IoFailure(ref msg)) if msg.contains("device unplugged")));
    assert!(result.unwrap_err().is_fatal());
    assert_eq!(step.get_read_count(), 1);
    assert_eq!(step.get_status(), StepStatus::Failed);
}

#[test]
fn read_failure_surfaces_from_the_reader() {
    let reader = DelimitedItemReaderBuilder::new()
        .delimiter(b'|')
        .quoting(false)
        .from_reader(failing_source());

    let first: Customer = reader.read().unwrap().unwrap();
    assert_eq!(first.id(), 1);

    let second = ItemReader::<Customer>::read(&reader);
    assert!(matches!(second, Err(BookError::IoFailure(_))));
}

#[test]
fn report_write_failure_is_reported() {
    let mut file = MockFile::default();
    file.expect_write().returning(|_buf| {
        let err = io::Error::from(ErrorKind::PermissionDenied);
        Result::Err(err)
    });

    let writer = ReportItemWriterBuilder::new()
        .title("Customers Report")
        .from_writer(file);
    let customers: [Customer; 0] = [];

    let result = write_report(&customers, &writer);

    assert!(matches!(result, Err(BookError::ItemWriter(_))));
}

#[test]
fn invalid_utf8_line_is_skipped() {
    let mut data = HEAD.to_vec();
    data.extend_from_slice(b"2|J\xffne|Roe|2 Elm St|Shelbyville|54321|555-9876|jane@example.com|20210704\n");
    data.extend_from_slice(b"3|Ann|Smith|6 Birch Ln|Victoria|V8W 1A1|555-0006|ann@example.com|20190301\n");

    let reader = DelimitedItemReaderBuilder::new()
        .delimiter(b'|')
        .quoting(false)
        .from_reader(data.as_slice());
    let step = LoadStepBuilder::<Customer>::new("customers")
        .reader(&reader)
        .build()
        .unwrap();

    let customers = step.execute().unwrap();

    assert_eq!(customers.len(), 2);
    assert!(!customers.contains_key(2));
    assert_eq!(step.get_error_count(), 1);
}
