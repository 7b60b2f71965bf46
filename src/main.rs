use std::{env, io, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Serialize;

use bookstore::{
    core::job::LoadJobBuilder,
    item::{
        json::{
            BOOKS_JSON_FILENAME, CUSTOMERS_JSON_FILENAME, PURCHASES_JSON_FILENAME,
            json_writer::JsonItemWriterBuilder,
        },
        report::{
            BOOKS_REPORT_FILENAME, CUSTOMERS_REPORT_FILENAME, PURCHASES_REPORT_FILENAME,
            TableRow, report_writer::ReportItemWriterBuilder, write_report,
        },
    },
};

const USAGE: &str = "\
Usage: bookstore [OPTIONS]

Options:
  -c, --customers        Print the customers report
  -b, --books            Print the books report
  -p, --purchases        Print the purchases report
  -a, --all              Print every report
  -j, --json             Also export each selected dataset as JSON
  -d, --data-dir <DIR>   Directory holding the data files (default: .)
  -h, --help             Print this help";

#[derive(Debug, Default, PartialEq)]
struct Options {
    customers: bool,
    books: bool,
    purchases: bool,
    json: bool,
    help: bool,
    data_dir: Option<PathBuf>,
}

impl Options {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--customers" => options.customers = true,
                "-b" | "--books" => options.books = true,
                "-p" | "--purchases" => options.purchases = true,
                "-a" | "--all" => {
                    options.customers = true;
                    options.books = true;
                    options.purchases = true;
                }
                "-j" | "--json" => options.json = true,
                "-h" | "--help" => options.help = true,
                "-d" | "--data-dir" => {
                    let dir = args.next().context("--data-dir needs a directory")?;
                    options.data_dir = Some(PathBuf::from(dir));
                }
                other => match other.strip_prefix("--data-dir=") {
                    Some(dir) => options.data_dir = Some(PathBuf::from(dir)),
                    None => bail!("unknown option: {other}"),
                },
            }
        }

        Ok(options)
    }
}

fn print_report<T: TableRow>(title: &str, filename: &str, rows: &[T]) -> Result<()> {
    let console = ReportItemWriterBuilder::new()
        .title(title)
        .from_writer(io::stdout().lock());
    write_report(rows, &console)?;

    ReportItemWriterBuilder::new()
        .title(title)
        .from_path(filename)
        .and_then(|file| write_report(rows, &file))
        .with_context(|| format!("Failed to write {filename}"))?;
    Ok(())
}

fn export_json<T: Serialize>(filename: &str, rows: &[T]) -> Result<()> {
    JsonItemWriterBuilder::new()
        .pretty_formatter(true)
        .from_path(filename)
        .and_then(|file| write_report(rows, &file))
        .with_context(|| format!("Failed to write {filename}"))?;
    info!("Exported {} records to {}", rows.len(), filename);
    Ok(())
}

fn run(options: &Options) -> Result<()> {
    let mut builder = LoadJobBuilder::new().name("bookstore");
    if let Some(dir) = &options.data_dir {
        builder = builder.data_dir(dir);
    }

    let data = builder.build().run().context("Failed to load data")?;

    if options.customers {
        debug!("generating the customer report");
        let customers = data.customers().sorted();
        print_report("Customers Report", CUSTOMERS_REPORT_FILENAME, &customers)?;
        if options.json {
            export_json(CUSTOMERS_JSON_FILENAME, &customers)?;
        }
    }

    if options.books {
        debug!("generating the book report");
        let books = data.books().sorted();
        print_report("Books Report", BOOKS_REPORT_FILENAME, &books)?;
        if options.json {
            export_json(BOOKS_JSON_FILENAME, &books)?;
        }
    }

    if options.purchases {
        debug!("generating the purchase report");
        print_report(
            "Purchases Report",
            PURCHASES_REPORT_FILENAME,
            &data.purchase_lines(),
        )?;
        if options.json {
            export_json(PURCHASES_JSON_FILENAME, &data.purchases().sorted())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    info!("Starting Books");

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{error}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    debug!("Options: {:?}", options);

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let code = match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    };

    info!("Duration: {} ms", start.elapsed().as_millis());
    info!("Books has stopped");
    code
}
