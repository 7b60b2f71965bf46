#![allow(dead_code, unused_imports)]

pub mod logs;
pub mod mocks;

use std::{fs, path::Path};

use tempfile::TempDir;

pub use logs::{capture_logs, logged};
pub use mocks::{MockFile, MockSource};

pub const CUSTOMERS: &str = "\
ID|First Name|Last Name|Street|City|Postal Code|Phone|Email|Join Date
1|John|Doe|1 Main St|Springfield|12345|555-1234|john@example.com|20200115
2|Jane|Roe|2 Elm St|Shelbyville|54321|555-9876|not-an-email|20210704
3|Sam|Cirka|3 Oak Ave|Burnaby|V5G 3H2|604-555-0100|sam@example.ca|19991231
4|Ada|Lovelace|4 Pine Rd|London|N1 9GU|555-0004|ada@example.com|20210230
x5|Bad|Id|5 Fir St|Delta|V4K 1A1|555-0005|bad@example.com|20200101
6|Ann|Smith|6 Birch Ln|Victoria|V8W 1A1|555-0006|ann@example.com|20190301
6|Ann|Smith-Jones|6 Birch Ln|Victoria|V8W 1A1|555-0006|ann@example.com|20190301
7|Too|Short|7 Cedar St|Surrey|V3T 0A1|555-0007
";

pub const BOOKS: &str = "\
book_id,isbn,authors,original_publication_year,original_title,average_rating,ratings_count,image_url
1,439023483,Suzanne Collins,2008.0,The Hunger Games,4.34,4780653,https://images.example.com/1.jpg
2,439554934,\"J.K. Rowling, Mary GrandPré\",1997.0,Harry Potter and the Philosopher's Stone,4.44,4602479,https://images.example.com/2.jpg
3,316015849,Stephenie Meyer,2005.0,Twilight,not-a-rating,3866839,https://images.example.com/3.jpg
";

pub const PURCHASES: &str = "\
id,customer_id,book_id,price
1,1,2,19.99
2,6,1,12.50
3,99,1,5.00
4,1,two,3.00
";

/// Creates a temporary data directory holding the given files.
pub fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Unable to create temp dir");
    for (name, content) in files {
        write(dir.path(), name, content);
    }
    dir
}

pub fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Unable to write data file");
}

/// A data directory holding all three sample files.
pub fn full_data_dir() -> TempDir {
    data_dir(&[
        ("customers.dat", CUSTOMERS),
        ("books500.csv", BOOKS),
        ("purchases.csv", PURCHASES),
    ])
}
