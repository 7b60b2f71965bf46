//! An in-memory `log` backend, so tests can look at what was logged.
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    entries: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Installs the capturing logger for the whole test binary.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("Unable to install the test logger");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Whether any entry at `level` contains `needle`.
pub fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .entries
        .lock()
        .map(|entries| {
            entries
                .iter()
                .any(|(at, message)| *at == level && message.contains(needle))
        })
        .unwrap_or(false)
}
