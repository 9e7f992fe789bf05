use chrono::Local;
use log::{Level, Log, Metadata, Record};
use rolebot_core::config::Config;

use std::io::{self, Write};

pub fn init(config: &Config) {
    if log::set_logger(&Logger).is_ok() {
        log::set_max_level(config.loglevel);
    }
}

/// Writes records of the rolebot crates. Errors and warnings go to stderr, everything
/// else to stdout.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("rolebot")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            label(record.level()),
            record.args()
        );

        // A closed stream has nowhere to report to.
        let _ = if to_stderr(record.level()) {
            io::stderr().lock().write_all(line.as_bytes())
        } else {
            io::stdout().lock().write_all(line.as_bytes())
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn to_stderr(level: Level) -> bool {
    level <= Level::Warn
}
